//! Where confirmed submissions go.

use vitrine_model::Submission;

/// Receiver for confirmed submissions.
///
/// No response is modeled: the form moves to its success state as soon as
/// the snapshot has been handed over.
pub trait SubmissionSink {
    /// Take a confirmed snapshot.
    fn submit(&mut self, submission: &Submission);
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn submit(&mut self, submission: &Submission) {
        (**self).submit(submission)
    }
}

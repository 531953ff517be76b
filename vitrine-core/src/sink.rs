use vitrine_contracts::prelude::SubmissionSink;
use vitrine_model::Submission;

/// Writes each confirmed submission to the log as one JSON document.
///
/// Stands in for a backend: nothing leaves the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmissionSink;

impl SubmissionSink for LogSubmissionSink {
    fn submit(&mut self, submission: &Submission) {
        match serde_json::to_string(submission) {
            Ok(payload) => {
                tracing::info!(target: "vitrine::submission", %payload, "contact form submitted");
            }
            Err(error) => {
                tracing::error!(%error, "failed to serialize submission");
            }
        }
    }
}

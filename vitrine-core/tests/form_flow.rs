use std::sync::Once;
use std::time::Duration;

use chrono::NaiveDate;
use mockall::{mock, predicate};
use vitrine_config::PageConfig;
use vitrine_contracts::prelude::SubmissionSink;
use vitrine_core::testing::{
    FixedClock, ManualScheduler, RecordingFormSurface, advance,
};
use vitrine_core::{EventOutcome, FormController, FormMessage};
use vitrine_model::{FieldId, FocusTarget, FormPhase, Submission};

mock! {
    Sink {}

    impl SubmissionSink for Sink {
        fn submit(&mut self, submission: &Submission);
    }
}

type Form = FormController<
    RecordingFormSurface,
    ManualScheduler<FormMessage>,
    MockSink,
    FixedClock,
>;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("vitrine=debug")
            .with_test_writer()
            .try_init();
    });
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

fn form_with(sink: MockSink) -> Form {
    init_tracing();
    FormController::new(
        RecordingFormSurface::default(),
        ManualScheduler::default(),
        sink,
        FixedClock::new(today()),
        &PageConfig::default(),
    )
}

fn enter(form: &mut Form, field: FieldId, value: &str) {
    form.surface_mut().values.set(field, value);
    form.update(FormMessage::FieldInput {
        field,
        value: value.into(),
    });
    form.update(FormMessage::FieldBlur(field));
}

fn fill(form: &mut Form, name: &str) {
    enter(form, FieldId::Name, name);
    enter(form, FieldId::GivenName, "Marie");
    enter(form, FieldId::Email, "marie@example.fr");
    enter(form, FieldId::Message, "Je souhaite soutenir la campagne.");
    pick_date(form, "1990-04-12");
}

fn pick_date(form: &mut Form, value: &str) {
    form.surface_mut().values.set(FieldId::BirthDate, value);
    form.update(FormMessage::FieldCommitted {
        field: FieldId::BirthDate,
        value: value.into(),
    });
}

#[test]
fn invalid_name_never_reaches_review() {
    let mut sink = MockSink::new();
    sink.expect_submit().never();
    let mut form = form_with(sink);
    fill(&mut form, "Dupont3");

    let outcome = form.update(FormMessage::Submit);

    assert!(outcome.should_prevent_default());
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.surface().review.is_none());
    assert_eq!(
        form.surface().focused(),
        Some(FocusTarget::Field(FieldId::Name))
    );
    assert_eq!(
        form.validity(FieldId::Name).and_then(|v| v.message.as_deref()),
        Some("Lettres, accents, tirets et espaces uniquement. Pas de chiffres.")
    );
}

#[test]
fn future_birth_date_blocks_submission() {
    let mut sink = MockSink::new();
    sink.expect_submit().never();
    let mut form = form_with(sink);
    fill(&mut form, "Dupont");
    pick_date(&mut form, "2025-10-02");

    form.update(FormMessage::Submit);
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(
        form.surface().focused(),
        Some(FocusTarget::Field(FieldId::BirthDate))
    );
}

#[test]
fn confirmed_submission_cycles_back_to_a_pristine_form() {
    let mut sink = MockSink::new();
    sink.expect_submit()
        .with(predicate::function(|submission: &Submission| {
            submission.name == "Dupont"
                && submission.given_name == "Marie"
                && submission.birth_date == "1990-04-12"
        }))
        .times(1)
        .return_const(());
    let mut form = form_with(sink);

    // A stale error from an earlier attempt must not survive the reset.
    enter(&mut form, FieldId::GivenName, "M4rie");
    fill(&mut form, "Dupont");
    enter(&mut form, FieldId::GivenName, "X");
    enter(&mut form, FieldId::GivenName, "Marie");

    assert_eq!(form.update(FormMessage::Submit), EventOutcome::PreventDefault);
    assert_eq!(form.phase(), FormPhase::Reviewing);

    assert_eq!(form.update(FormMessage::Confirm), EventOutcome::Handled);
    assert_eq!(form.phase(), FormPhase::Success);
    assert!(form.surface().success_visible);

    advance(&mut form, Duration::from_millis(1_000));

    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.values().is_pristine());
    assert!(form.surface().field_errors.is_empty());
    for field in FieldId::VALIDATED {
        assert_eq!(form.validity(field), None);
    }

    form.update(FormMessage::CloseSuccess);
    assert!(!form.surface().success_visible);
}

#[test]
fn review_summary_shows_markup_as_text() {
    let mut sink = MockSink::new();
    sink.expect_submit().never();
    let mut form = form_with(sink);
    fill(&mut form, "Dupont");
    enter(&mut form, FieldId::Email, "a&b@<example>.fr");
    enter(&mut form, FieldId::Message, "<script>alert('x')</script> & co");

    form.update(FormMessage::Submit);

    let review = form.surface().review.clone().expect("review is open");
    let html = review.as_str();
    assert!(html.contains("a&amp;b@&lt;example&gt;.fr"));
    assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt; &amp; co"));
    assert!(!html.contains("<script>"));

    form.update(FormMessage::Cancel);
    assert_eq!(form.phase(), FormPhase::Editing);
}

#[test]
fn second_confirmation_supersedes_the_pending_reset() {
    let mut sink = MockSink::new();
    sink.expect_submit().times(2).return_const(());
    let mut form = form_with(sink);

    fill(&mut form, "Dupont");
    form.update(FormMessage::Submit);
    form.update(FormMessage::Confirm);
    form.update(FormMessage::CloseSuccess);

    advance(&mut form, Duration::from_millis(500));
    fill(&mut form, "Martin");
    form.update(FormMessage::Submit);
    form.update(FormMessage::Confirm);

    assert_eq!(form.scheduler().live_timers(), 1);

    // The first reset would have fired at 1000ms; the second one is due at 1500ms.
    assert_eq!(advance(&mut form, Duration::from_millis(600)), 0);
    assert_eq!(advance(&mut form, Duration::from_millis(400)), 1);
    assert!(form.values().is_pristine());
}

#[test]
fn page_hidden_during_the_reset_delay_still_resets() {
    let mut sink = MockSink::new();
    sink.expect_submit().times(2).return_const(());
    let mut form = form_with(sink);

    fill(&mut form, "Dupont");
    form.update(FormMessage::Submit);
    form.update(FormMessage::Confirm);

    form.shutdown();
    advance(&mut form, Duration::from_secs(60));
    assert_eq!(form.update(FormMessage::Submit), EventOutcome::PreventDefault);
    assert_eq!(form.phase(), FormPhase::Success);

    form.resume();
    advance(&mut form, Duration::from_millis(1_000));
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.surface().reset_count, 1);
    assert_eq!(form.values().name, "");

    fill(&mut form, "Martin");
    form.update(FormMessage::Submit);
    form.update(FormMessage::Confirm);
    assert_eq!(form.phase(), FormPhase::Success);
}

//! Contact form controller
//!
//! Tracks field values and their validity, gates submission, and runs the
//! review → confirm → success cycle. Values arrive with input events, and
//! are re-read from the surface on blur, on submit and after a reset, so
//! controls the browser filled on its own are seen too.
//!
//! ```text
//! Editing ──Submit(valid)──▶ Reviewing ──Confirm──▶ Success
//!    ▲                          │                     │
//!    └──────────Cancel──────────┘    ResetElapsed / CloseSuccess
//!    ▲                                                │
//!    └────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use vitrine_config::{CopyConfig, FormConfig, PageConfig};
use vitrine_contracts::prelude::{
    Clock, FormSurface, Scheduler, SubmissionSink, TimerHandle,
};
use vitrine_model::{
    CampaignChoice, FieldId, FocusTarget, FormPhase, FormValues, Submission,
};

use super::messages::FormMessage;
use super::review::ReviewDialog;
use super::rules::{ValidationError, validate_birth_date, validate_name};
use crate::outcome::EventOutcome;

/// Last computed state of one validated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidity {
    /// Whether the last check passed.
    pub valid: bool,
    /// Inline text currently shown next to the field. `None` while the field
    /// is valid, and also while it is blank.
    pub message: Option<String>,
}

impl FieldValidity {
    fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }
}

/// State machine behind the contact form.
#[derive(Debug)]
pub struct FormController<S, T, K, C> {
    surface: S,
    scheduler: T,
    sink: K,
    clock: C,
    settings: FormConfig,
    copy: CopyConfig,
    phase: FormPhase,
    values: FormValues,
    validity: BTreeMap<FieldId, FieldValidity>,
    pending: Option<Submission>,
    reset_timer: Option<TimerHandle>,
    /// A reset was due when the controller was shut down.
    reset_interrupted: bool,
    success_visible: bool,
}

impl<S, T, K, C> FormController<S, T, K, C>
where
    S: FormSurface,
    T: Scheduler<FormMessage>,
    K: SubmissionSink,
    C: Clock,
{
    /// Build a controller in the editing phase. Nothing is read from the
    /// surface until the first event.
    pub fn new(
        surface: S,
        scheduler: T,
        sink: K,
        clock: C,
        config: &PageConfig,
    ) -> Self {
        Self {
            surface,
            scheduler,
            sink,
            clock,
            settings: config.form.clone(),
            copy: config.copy.clone(),
            phase: FormPhase::Editing,
            values: FormValues::default(),
            validity: BTreeMap::new(),
            pending: None,
            reset_timer: None,
            reset_interrupted: false,
            success_visible: false,
        }
    }

    /// Single entry point for every form event.
    pub fn update(&mut self, message: FormMessage) -> EventOutcome {
        tracing::trace!(?message, phase = ?self.phase, "form update");
        match message {
            FormMessage::FieldInput { field, value } => {
                self.values.set(field, value);
                // Dates wait for a committed change or blur.
                if matches!(field, FieldId::Name | FieldId::GivenName) {
                    self.refresh_field(field);
                }
                EventOutcome::Handled
            }
            FormMessage::FieldCommitted { field, value } => {
                self.values.set(field, value);
                if field.is_validated() {
                    self.refresh_field(field);
                }
                EventOutcome::Handled
            }
            FormMessage::FieldBlur(field) => {
                if !field.is_validated() {
                    return EventOutcome::Ignored;
                }
                self.read_field(field);
                self.refresh_field(field);
                EventOutcome::Handled
            }
            FormMessage::CampaignSelected(choice) => {
                self.select_campaign(choice);
                EventOutcome::Handled
            }
            FormMessage::Submit => {
                self.submit();
                // Native submission never runs; the dialog takes over.
                EventOutcome::PreventDefault
            }
            FormMessage::Confirm => self.confirm(),
            FormMessage::Cancel => self.cancel(),
            FormMessage::CloseSuccess => self.close_success(),
            FormMessage::ResetElapsed => self.reset_elapsed(),
        }
    }

    /// Cancel a pending reset. Used when the page goes away; [`resume`]
    /// schedules it again.
    ///
    /// [`resume`]: FormController::resume
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.reset_timer.take() {
            self.scheduler.clear(handle);
            self.reset_interrupted = true;
        }
    }

    /// Re-arm a reset that [`shutdown`](FormController::shutdown) cancelled,
    /// with a full delay.
    pub fn resume(&mut self) {
        if !std::mem::take(&mut self.reset_interrupted) {
            return;
        }
        self.schedule_reset();
        tracing::debug!("pending form reset re-armed");
    }

    /// Run the rule for `field` against `value` without touching any state.
    pub fn check(
        &self,
        field: FieldId,
        value: &str,
    ) -> Result<(), ValidationError> {
        match field {
            FieldId::Name | FieldId::GivenName => validate_name(value),
            FieldId::BirthDate => validate_birth_date(
                value,
                self.clock.today(),
                self.settings.min_birth_year,
                self.settings.max_birth_year,
            )
            .map(|_| ()),
            FieldId::Email | FieldId::Message | FieldId::OtherCampaign => {
                Ok(())
            }
        }
    }

    /// Where the form is in its cycle.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Field values as last seen.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Result of the last check of `field`, `None` until it was checked.
    pub fn validity(&self, field: FieldId) -> Option<&FieldValidity> {
        self.validity.get(&field)
    }

    /// Snapshot awaiting confirmation, while the review dialog is open.
    pub fn pending_submission(&self) -> Option<&Submission> {
        self.pending.as_ref()
    }

    /// Whether the success acknowledgment is open.
    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Whether a post-confirmation reset is scheduled.
    pub fn reset_pending(&self) -> bool {
        self.reset_timer.is_some()
    }

    /// The page surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The page surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The timer scheduler.
    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// The timer scheduler, mutably.
    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    /// Where confirmed submissions go.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Where confirmed submissions go, mutably.
    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    fn read_field(&mut self, field: FieldId) {
        let value = self.surface.field_value(field);
        self.values.set(field, value);
    }

    /// Replace the tracked values with what the surface holds now.
    fn read_fields(&mut self) {
        for field in FieldId::ALL {
            self.read_field(field);
        }
        self.values.campaign = self.surface.selected_campaign();
    }

    fn schedule_reset(&mut self) {
        if let Some(previous) = self.reset_timer.take() {
            self.scheduler.clear(previous);
        }
        self.reset_timer = Some(self.scheduler.set_timeout(
            self.settings.reset_delay(),
            FormMessage::ResetElapsed,
        ));
    }

    fn error_copy(&self, field: FieldId) -> String {
        match field {
            FieldId::BirthDate => self.copy.birth_date_error(
                self.settings.min_birth_year,
                self.settings.max_birth_year,
            ),
            _ => self.copy.name_error.clone(),
        }
    }

    /// Re-run the rule for `field` and bring its inline error in line.
    /// Returns whether the field passed.
    fn refresh_field(&mut self, field: FieldId) -> bool {
        let value = self.values.get(field);
        let result = self.check(field, value);
        let blank = value.trim().is_empty();

        let validity = match &result {
            Ok(()) => {
                self.surface.clear_field_error(field);
                FieldValidity::valid()
            }
            Err(_) if blank => {
                self.surface.clear_field_error(field);
                FieldValidity {
                    valid: false,
                    message: None,
                }
            }
            Err(error) => {
                let text = self.error_copy(field);
                self.surface.show_field_error(field, &text);
                tracing::debug!(%field, %error, "field rejected");
                FieldValidity {
                    valid: false,
                    message: Some(text),
                }
            }
        };
        self.validity.insert(field, validity);
        result.is_ok()
    }

    fn select_campaign(&mut self, choice: CampaignChoice) {
        self.surface.set_other_campaign_visible(choice.is_other());
        self.values.campaign = Some(choice);
    }

    fn submit(&mut self) {
        if self.phase != FormPhase::Editing {
            tracing::debug!(phase = ?self.phase, "submit ignored outside editing");
            return;
        }

        self.read_fields();
        if !self.surface.check_validity() {
            self.surface.report_validity();
            return;
        }

        for field in FieldId::VALIDATED {
            if !self.refresh_field(field) {
                self.surface.focus(FocusTarget::Field(field));
                return;
            }
        }

        let snapshot = Submission::capture(&self.values);
        let dialog = ReviewDialog::new(
            &snapshot,
            &self.copy,
            self.settings.summary_message_limit,
        )
        .render();
        self.surface.show_review(&dialog);
        self.surface.focus(FocusTarget::ReviewCancel);
        self.pending = Some(snapshot);
        self.phase = FormPhase::Reviewing;
        tracing::debug!("form under review");
    }

    fn confirm(&mut self) -> EventOutcome {
        if self.phase != FormPhase::Reviewing {
            return EventOutcome::Ignored;
        }
        self.surface.hide_review();
        self.surface.focus(FocusTarget::SubmitButton);

        if let Some(snapshot) = self.pending.take() {
            self.sink.submit(&snapshot);
        }

        self.surface.show_notification(
            &self.copy.success_notification,
            self.settings.notification_ttl(),
        );
        self.surface.show_success();
        self.success_visible = true;
        self.surface.focus(FocusTarget::SuccessClose);

        self.reset_interrupted = false;
        self.schedule_reset();

        self.phase = FormPhase::Success;
        tracing::info!("contact form confirmed");
        EventOutcome::Handled
    }

    fn cancel(&mut self) -> EventOutcome {
        if self.phase != FormPhase::Reviewing {
            return EventOutcome::Ignored;
        }
        self.pending = None;
        self.surface.hide_review();
        self.surface.focus(FocusTarget::SubmitButton);
        self.phase = FormPhase::Editing;
        EventOutcome::Handled
    }

    fn close_success(&mut self) -> EventOutcome {
        if !self.success_visible {
            return EventOutcome::Ignored;
        }
        self.surface.hide_success();
        self.success_visible = false;
        self.surface.focus(FocusTarget::SubmitButton);
        if self.phase == FormPhase::Success {
            self.phase = FormPhase::Editing;
        }
        EventOutcome::Handled
    }

    fn reset_elapsed(&mut self) -> EventOutcome {
        // The one-shot has fired; its handle has nothing left to cancel.
        if self.reset_timer.take().is_none() {
            tracing::warn!("form reset fired without a pending timer; ignoring");
            return EventOutcome::Ignored;
        }

        self.surface.reset_fields();
        self.surface.clear_all_errors();
        self.validity.clear();
        // Controls go back to their markup defaults, not necessarily blank.
        self.read_fields();
        let other = self
            .values
            .campaign
            .as_ref()
            .is_some_and(CampaignChoice::is_other);
        self.surface.set_other_campaign_visible(other);

        if self.phase == FormPhase::Success {
            self.phase = FormPhase::Editing;
        }
        tracing::debug!("form reset");
        EventOutcome::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        FixedClock, FormCall, ManualScheduler, RecordingFormSurface, advance,
    };
    use chrono::NaiveDate;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct CollectingSink(Vec<Submission>);

    impl SubmissionSink for CollectingSink {
        fn submit(&mut self, submission: &Submission) {
            self.0.push(submission.clone());
        }
    }

    type Form = FormController<
        RecordingFormSurface,
        ManualScheduler<FormMessage>,
        CollectingSink,
        FixedClock,
    >;

    fn form() -> Form {
        FormController::new(
            RecordingFormSurface::default(),
            ManualScheduler::default(),
            CollectingSink::default(),
            FixedClock::new(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()),
            &PageConfig::default(),
        )
    }

    /// Edit the control, then deliver the `input` event the page would fire.
    fn type_into(form: &mut Form, field: FieldId, value: &str) {
        form.surface_mut().values.set(field, value);
        form.update(FormMessage::FieldInput {
            field,
            value: value.into(),
        });
    }

    fn commit(form: &mut Form, field: FieldId, value: &str) {
        form.surface_mut().values.set(field, value);
        form.update(FormMessage::FieldCommitted {
            field,
            value: value.into(),
        });
    }

    fn choose(form: &mut Form, choice: CampaignChoice) {
        form.surface_mut().values.campaign = Some(choice.clone());
        form.update(FormMessage::CampaignSelected(choice));
    }

    fn fill_valid(form: &mut Form) {
        type_into(form, FieldId::Name, "Dupont");
        type_into(form, FieldId::GivenName, "Marie");
        type_into(form, FieldId::Email, "marie@example.fr");
        type_into(form, FieldId::Message, "Bonjour !");
        commit(form, FieldId::BirthDate, "1990-04-12");
    }

    fn filled_values() -> FormValues {
        FormValues {
            name: "Dupont".into(),
            given_name: "Marie".into(),
            email: "marie@example.fr".into(),
            birth_date: "1990-04-12".into(),
            message: "Bonjour !".into(),
            ..FormValues::default()
        }
    }

    #[test]
    fn typing_a_bad_name_shows_the_inline_error() {
        let mut form = form();
        type_into(&mut form, FieldId::Name, "Jean2");

        let validity = form.validity(FieldId::Name).unwrap();
        assert!(!validity.valid);
        assert_eq!(
            form.surface().field_error(FieldId::Name),
            Some("Lettres, accents, tirets et espaces uniquement. Pas de chiffres.")
        );

        type_into(&mut form, FieldId::Name, "Jean");
        assert!(form.validity(FieldId::Name).unwrap().valid);
        assert_eq!(form.surface().field_error(FieldId::Name), None);
    }

    #[test]
    fn blank_fields_never_show_an_error() {
        let mut form = form();
        type_into(&mut form, FieldId::GivenName, "   ");
        form.update(FormMessage::FieldBlur(FieldId::GivenName));

        let validity = form.validity(FieldId::GivenName).unwrap();
        assert!(!validity.valid);
        assert_eq!(validity.message, None);
        assert_eq!(form.surface().field_error(FieldId::GivenName), None);
    }

    #[test]
    fn birth_date_waits_for_commit_or_blur() {
        let mut form = form();
        type_into(&mut form, FieldId::BirthDate, "1850-01-01");
        assert_eq!(form.validity(FieldId::BirthDate), None);

        form.update(FormMessage::FieldBlur(FieldId::BirthDate));
        assert_eq!(
            form.surface().field_error(FieldId::BirthDate),
            Some("La date de naissance doit être entre 1900 et 2025.")
        );
    }

    #[test]
    fn blur_on_unvalidated_field_is_ignored() {
        let mut form = form();
        assert_eq!(
            form.update(FormMessage::FieldBlur(FieldId::Email)),
            EventOutcome::Ignored
        );
    }

    #[test]
    fn native_constraint_failure_stops_submission() {
        let mut form = form();
        fill_valid(&mut form);
        form.surface_mut().natively_valid = false;

        assert_eq!(form.update(FormMessage::Submit), EventOutcome::PreventDefault);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.surface().report_validity_count, 1);
        assert!(form.surface().review.is_none());
    }

    #[test]
    fn first_failing_field_takes_focus() {
        let mut form = form();
        fill_valid(&mut form);
        type_into(&mut form, FieldId::GivenName, "M4rie");
        commit(&mut form, FieldId::BirthDate, "2030-01-01");

        form.update(FormMessage::Submit);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(
            form.surface().focused(),
            Some(FocusTarget::Field(FieldId::GivenName))
        );
    }

    #[test]
    fn cancel_returns_to_editing_and_keeps_values() {
        let mut form = form();
        fill_valid(&mut form);
        form.update(FormMessage::Submit);
        assert_eq!(form.surface().focused(), Some(FocusTarget::ReviewCancel));
        assert!(form.pending_submission().is_some());

        assert_eq!(form.update(FormMessage::Cancel), EventOutcome::Handled);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.pending_submission().is_none());
        assert!(form.surface().review.is_none());
        assert_eq!(form.surface().focused(), Some(FocusTarget::SubmitButton));
        assert_eq!(form.values().name, "Dupont");
        assert!(form.sink().0.is_empty());
    }

    #[test]
    fn confirm_hands_over_the_snapshot_and_schedules_reset() {
        let mut form = form();
        fill_valid(&mut form);
        choose(&mut form, CampaignChoice::Other);
        type_into(&mut form, FieldId::OtherCampaign, "Salon du livre");
        form.update(FormMessage::Submit);
        form.update(FormMessage::Confirm);

        assert_eq!(form.phase(), FormPhase::Success);
        assert_eq!(form.sink().0.len(), 1);
        let sent = &form.sink().0[0];
        assert_eq!(sent.name, "Dupont");
        assert_eq!(sent.other_campaign.as_deref(), Some("Salon du livre"));

        let surface = form.surface();
        assert!(surface.success_visible);
        assert_eq!(surface.focused(), Some(FocusTarget::SuccessClose));
        assert_eq!(
            surface.notifications,
            vec![(
                "✓ Votre message a été validé avec succès !".to_string(),
                Duration::from_secs(5)
            )]
        );
        assert!(form.reset_pending());
    }

    #[test]
    fn reset_restores_a_pristine_form() {
        let mut form = form();
        fill_valid(&mut form);
        choose(&mut form, CampaignChoice::Other);
        form.update(FormMessage::Submit);
        form.update(FormMessage::Confirm);

        assert_eq!(advance(&mut form, Duration::from_millis(999)), 0);
        assert_eq!(advance(&mut form, Duration::from_millis(1)), 1);

        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.values().is_pristine());
        assert_eq!(form.validity(FieldId::Name), None);
        assert!(!form.reset_pending());

        let surface = form.surface();
        assert_eq!(surface.reset_count, 1);
        assert!(surface.field_errors.is_empty());
        assert_eq!(surface.other_campaign_visible, Some(false));
        // Acknowledgment stays until the user closes it.
        assert!(surface.success_visible);

        assert_eq!(form.update(FormMessage::CloseSuccess), EventOutcome::Handled);
        assert!(!form.surface().success_visible);
        assert_eq!(form.surface().focused(), Some(FocusTarget::SubmitButton));
    }

    #[test]
    fn closing_success_early_still_resets_later() {
        let mut form = form();
        fill_valid(&mut form);
        form.update(FormMessage::Submit);
        form.update(FormMessage::Confirm);
        form.update(FormMessage::CloseSuccess);
        assert_eq!(form.phase(), FormPhase::Editing);

        advance(&mut form, Duration::from_secs(1));
        assert!(form.values().is_pristine());
    }

    #[test]
    fn submit_outside_editing_is_swallowed() {
        let mut form = form();
        fill_valid(&mut form);
        form.update(FormMessage::Submit);
        let calls = form.surface().calls.len();

        assert_eq!(form.update(FormMessage::Submit), EventOutcome::PreventDefault);
        assert_eq!(form.surface().calls.len(), calls);
        assert_eq!(form.phase(), FormPhase::Reviewing);
    }

    #[test]
    fn confirm_and_cancel_need_an_open_review() {
        let mut form = form();
        assert_eq!(form.update(FormMessage::Confirm), EventOutcome::Ignored);
        assert_eq!(form.update(FormMessage::Cancel), EventOutcome::Ignored);
        assert_eq!(form.update(FormMessage::CloseSuccess), EventOutcome::Ignored);
        assert_eq!(form.update(FormMessage::ResetElapsed), EventOutcome::Ignored);
        assert!(form.surface().calls.is_empty());
    }

    #[test]
    fn campaign_choice_toggles_the_other_group() {
        let mut form = form();
        form.update(FormMessage::CampaignSelected(CampaignChoice::Other));
        assert_eq!(form.surface().other_campaign_visible, Some(true));

        form.update(FormMessage::CampaignSelected(CampaignChoice::from_radio_value(
            "printemps",
        )));
        assert_eq!(form.surface().other_campaign_visible, Some(false));
        assert!(
            form.surface()
                .calls
                .contains(&FormCall::SetOtherCampaignVisible(true))
        );
    }

    #[test]
    fn shutdown_cancels_the_pending_reset() {
        let mut form = form();
        fill_valid(&mut form);
        form.update(FormMessage::Submit);
        form.update(FormMessage::Confirm);
        form.shutdown();

        assert_eq!(form.scheduler().live_timers(), 0);
        assert_eq!(advance(&mut form, Duration::from_secs(5)), 0);
        assert_eq!(form.values().name, "Dupont");
    }

    #[test]
    fn resume_rearms_a_reset_cut_short_by_shutdown() {
        let mut form = form();
        fill_valid(&mut form);
        form.update(FormMessage::Submit);
        form.update(FormMessage::Confirm);
        advance(&mut form, Duration::from_millis(400));
        form.shutdown();
        advance(&mut form, Duration::from_secs(60));
        assert_eq!(form.phase(), FormPhase::Success);

        form.resume();
        assert!(form.reset_pending());
        assert_eq!(advance(&mut form, Duration::from_millis(1_000)), 1);

        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.surface().reset_count, 1);
        assert!(form.values().is_pristine());

        fill_valid(&mut form);
        form.update(FormMessage::Submit);
        assert_eq!(form.phase(), FormPhase::Reviewing);
    }

    #[test]
    fn resume_without_an_interrupted_reset_schedules_nothing() {
        let mut form = form();
        form.shutdown();
        form.resume();
        assert_eq!(form.scheduler().live_timers(), 0);

        fill_valid(&mut form);
        form.update(FormMessage::Submit);
        form.update(FormMessage::Confirm);
        advance(&mut form, Duration::from_secs(1));
        form.shutdown();
        form.resume();
        assert!(!form.reset_pending());
    }

    #[test]
    fn submit_reads_values_the_browser_filled_in() {
        let mut form = form();
        *form.surface_mut() = RecordingFormSurface::prefilled(filled_values());

        form.update(FormMessage::Submit);

        assert_eq!(form.phase(), FormPhase::Reviewing);
        assert_eq!(
            form.pending_submission().map(|pending| pending.name.as_str()),
            Some("Dupont")
        );
        assert!(form.surface().field_errors.is_empty());
    }

    #[test]
    fn prefilled_bad_name_is_reported_on_submit() {
        let mut form = form();
        let values = FormValues {
            name: "Dupont3".into(),
            ..filled_values()
        };
        *form.surface_mut() = RecordingFormSurface::prefilled(values);

        form.update(FormMessage::Submit);

        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(
            form.surface().field_error(FieldId::Name),
            Some("Lettres, accents, tirets et espaces uniquement. Pas de chiffres.")
        );
        assert_eq!(
            form.surface().focused(),
            Some(FocusTarget::Field(FieldId::Name))
        );
    }

    #[test]
    fn blur_checks_the_control_not_the_last_event() {
        let mut form = form();
        form.surface_mut().values.set(FieldId::BirthDate, "1850-01-01");

        form.update(FormMessage::FieldBlur(FieldId::BirthDate));

        assert_eq!(form.values().birth_date, "1850-01-01");
        assert!(form.surface().field_error(FieldId::BirthDate).is_some());
    }

    #[test]
    fn reset_picks_up_markup_defaults() {
        let mut form = form();
        let defaults = FormValues {
            email: "contact@example.fr".into(),
            campaign: Some(CampaignChoice::Other),
            ..FormValues::default()
        };
        *form.surface_mut() = RecordingFormSurface::prefilled(defaults);
        fill_valid(&mut form);
        form.update(FormMessage::Submit);
        form.update(FormMessage::Confirm);
        advance(&mut form, Duration::from_secs(1));

        assert_eq!(form.values().name, "");
        assert_eq!(form.values().email, "contact@example.fr");
        assert_eq!(form.surface().other_campaign_visible, Some(true));
    }
}

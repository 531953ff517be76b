//! What the contact form controller reads from and writes to.

use std::time::Duration;

use vitrine_model::{CampaignChoice, FieldId, FocusTarget, Markup};

/// Widgets the contact form controller drives.
pub trait FormSurface {
    /// Current value of `field` as the page holds it, including values the
    /// browser filled in without an input event.
    fn field_value(&self, field: FieldId) -> String;

    /// Checked option of the campaign radio group, if any.
    fn selected_campaign(&self) -> Option<CampaignChoice>;

    /// Native required/format constraints for the whole form.
    fn check_validity(&self) -> bool;

    /// Let the host surface its own message for the first field failing a
    /// native constraint.
    fn report_validity(&mut self);

    /// Flag a field as invalid and show `message` next to it. Calling this
    /// again for the same field replaces the message.
    fn show_field_error(&mut self, field: FieldId, message: &str);

    /// Remove the inline error of `field`, if one is shown.
    fn clear_field_error(&mut self, field: FieldId);

    /// Drop every error marker and message in the form.
    fn clear_all_errors(&mut self);

    /// Move keyboard focus.
    fn focus(&mut self, target: FocusTarget);

    /// Open the review dialog with the given body.
    fn show_review(&mut self, dialog: &Markup);

    /// Close the review dialog. Closing an absent dialog does nothing.
    fn hide_review(&mut self);

    /// Show the success acknowledgment.
    fn show_success(&mut self);

    /// Hide the success acknowledgment.
    fn hide_success(&mut self);

    /// Post a transient notification that removes itself after `ttl`.
    fn show_notification(&mut self, text: &str, ttl: Duration);

    /// Restore every control to its initial value.
    fn reset_fields(&mut self);

    /// Show or hide the free-text group of the "other campaign" option.
    fn set_other_campaign_visible(&mut self, visible: bool);
}

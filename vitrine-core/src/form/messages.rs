use vitrine_model::{CampaignChoice, FieldId};

/// Everything the contact form reacts to.
#[derive(Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FormMessage {
    // Field events
    /// Keystroke-level edit (`input`).
    FieldInput { field: FieldId, value: String },
    /// Committed edit (`change`), e.g. a date picked from the native picker.
    FieldCommitted { field: FieldId, value: String },
    /// Focus left a field.
    FieldBlur(FieldId),
    /// A campaign radio was checked.
    CampaignSelected(CampaignChoice),

    // Submission flow
    /// The form's submit event.
    Submit,
    /// "Confirmer et envoyer" in the review dialog.
    Confirm,
    /// Cancel or close in the review dialog.
    Cancel,
    /// Close control of the success acknowledgment.
    CloseSuccess,
    /// The post-confirm reset delay has elapsed.
    ResetElapsed,
}

impl FormMessage {
    /// Stable label for logs. Never includes field contents.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FieldInput { .. } => "Form::FieldInput",
            Self::FieldCommitted { .. } => "Form::FieldCommitted",
            Self::FieldBlur(_) => "Form::FieldBlur",
            Self::CampaignSelected(_) => "Form::CampaignSelected",
            Self::Submit => "Form::Submit",
            Self::Confirm => "Form::Confirm",
            Self::Cancel => "Form::Cancel",
            Self::CloseSuccess => "Form::CloseSuccess",
            Self::ResetElapsed => "Form::ResetElapsed",
        }
    }
}

// Field values are user input; keep them out of logs.
impl std::fmt::Debug for FormMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldInput { field, value }
            | Self::FieldCommitted { field, value } => write!(
                f,
                "{}({field}, {} chars)",
                self.name(),
                value.chars().count()
            ),
            Self::FieldBlur(field) => write!(f, "Form::FieldBlur({field})"),
            Self::CampaignSelected(choice) => write!(
                f,
                "Form::CampaignSelected({})",
                choice.radio_value()
            ),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_field_values() {
        let message = FormMessage::FieldInput {
            field: FieldId::Email,
            value: "marie@example.fr".into(),
        };
        let rendered = format!("{message:?}");
        assert_eq!(rendered, "Form::FieldInput(email, 16 chars)");
        assert!(!rendered.contains("marie"));
    }
}

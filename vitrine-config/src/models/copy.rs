use serde::{Deserialize, Serialize};

/// User-facing text. Placeholders in braces are substituted at render time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct CopyConfig {
    /// Placeholders: `{current}` (1-based), `{total}`.
    pub slide_announcement: String,
    pub pause_label: String,
    pub pause_title: String,
    pub resume_label: String,
    pub resume_title: String,

    pub name_error: String,
    /// Placeholders: `{min}`, `{max}` (birth year bounds).
    pub birth_date_error: String,
    pub success_notification: String,

    pub review_title: String,
    pub review_heading: String,
    pub review_name_label: String,
    pub review_given_name_label: String,
    pub review_email_label: String,
    pub review_message_label: String,
    pub review_question: String,
    pub review_cancel_label: String,
    pub review_confirm_label: String,
    pub review_close_label: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            slide_announcement: "Diapositive {current} sur {total}".into(),
            pause_label: "⏸ Pause".into(),
            pause_title: "Mettre en pause le carrousel automatique".into(),
            resume_label: "▶ Lecture".into(),
            resume_title: "Reprendre la lecture automatique du carrousel"
                .into(),

            name_error:
                "Lettres, accents, tirets et espaces uniquement. Pas de chiffres."
                    .into(),
            birth_date_error:
                "La date de naissance doit être entre {min} et {max}.".into(),
            success_notification: "✓ Votre message a été validé avec succès !"
                .into(),

            review_title: "Confirmer votre message".into(),
            review_heading: "Récapitulatif :".into(),
            review_name_label: "Nom :".into(),
            review_given_name_label: "Prénom :".into(),
            review_email_label: "Email :".into(),
            review_message_label: "Message :".into(),
            review_question: "Êtes-vous sûr de vouloir envoyer ce message ?"
                .into(),
            review_cancel_label: "Annuler".into(),
            review_confirm_label: "Confirmer et envoyer".into(),
            review_close_label: "Fermer".into(),
        }
    }
}

impl CopyConfig {
    /// "Slide X of N" status text.
    pub fn slide_announcement(&self, current: usize, total: usize) -> String {
        fill(
            &self.slide_announcement,
            &[("current", &current.to_string()), ("total", &total.to_string())],
        )
    }

    /// Inline error for a rejected birth date.
    pub fn birth_date_error(&self, min_year: i32, max_year: i32) -> String {
        fill(
            &self.birth_date_error,
            &[("min", &min_year.to_string()), ("max", &max_year.to_string())],
        )
    }
}

fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{key}}}"), value)
        })
}

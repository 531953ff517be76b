//! Body of the confirmation dialog shown before a message is sent.

use vitrine_config::CopyConfig;
use vitrine_model::{Markup, Submission};

const ELLIPSIS: &str = "...";

/// Builds the review dialog for one snapshot.
///
/// Every piece of text, including the configurable copy, goes through
/// [`Markup::push_text`]; only the element skeleton is trusted.
#[derive(Debug)]
pub struct ReviewDialog<'a> {
    submission: &'a Submission,
    copy: &'a CopyConfig,
    message_limit: usize,
}

impl<'a> ReviewDialog<'a> {
    /// Summarize `submission`, cutting its message after `message_limit`
    /// characters.
    pub fn new(
        submission: &'a Submission,
        copy: &'a CopyConfig,
        message_limit: usize,
    ) -> Self {
        Self {
            submission,
            copy,
            message_limit,
        }
    }

    /// The dialog body, ready for the surface.
    pub fn render(&self) -> Markup {
        let copy = self.copy;
        let mut markup = Markup::trusted(r#"<div class="modal-content">"#);

        markup
            .push_trusted(r#"<button type="button" class="modal-close" aria-label=""#)
            .push_text(&copy.review_close_label)
            .push_trusted(r#"">&times;</button>"#);

        markup
            .push_trusted(r#"<h2 id="confirm-title">"#)
            .push_text(&copy.review_title)
            .push_trusted("</h2>");

        markup
            .push_trusted("<p><strong>")
            .push_text(&copy.review_heading)
            .push_trusted("</strong></p>");

        let message = summarize(&self.submission.message, self.message_limit);
        markup.push_trusted(r#"<ul class="review-summary">"#);
        for (label, value) in [
            (&copy.review_name_label, self.submission.name.as_str()),
            (
                &copy.review_given_name_label,
                self.submission.given_name.as_str(),
            ),
            (&copy.review_email_label, self.submission.email.as_str()),
            (&copy.review_message_label, message.as_str()),
        ] {
            markup
                .push_trusted("<li><strong>")
                .push_text(label)
                .push_trusted("</strong> ")
                .push_text(value)
                .push_trusted("</li>");
        }
        markup.push_trusted("</ul>");

        markup
            .push_trusted(r#"<p class="review-question">"#)
            .push_text(&copy.review_question)
            .push_trusted("</p>");

        markup
            .push_trusted(r#"<div class="modal-actions">"#)
            .push_trusted(
                r#"<button type="button" class="btn-secondary" id="cancel-btn">"#,
            )
            .push_text(&copy.review_cancel_label)
            .push_trusted("</button>")
            .push_trusted(
                r#"<button type="button" class="btn-primary" id="confirm-btn">"#,
            )
            .push_text(&copy.review_confirm_label)
            .push_trusted("</button></div>");

        markup.push_trusted("</div>");
        markup
    }
}

/// First `limit` characters of `message`, with an ellipsis when cut.
pub fn summarize(message: &str, limit: usize) -> String {
    match message.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &message[..cut]),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, message: &str) -> Submission {
        Submission {
            name: name.into(),
            given_name: "Marie".into(),
            email: "marie@example.fr".into(),
            message: message.into(),
            birth_date: "1990-04-12".into(),
            campaign: None,
            other_campaign: None,
        }
    }

    #[test]
    fn summary_keeps_short_messages_intact() {
        assert_eq!(summarize("Bonjour", 100), "Bonjour");
        let exact = "a".repeat(100);
        assert_eq!(summarize(&exact, 100), exact);
    }

    #[test]
    fn summary_cuts_on_character_boundaries() {
        let long = "é".repeat(101);
        let summary = summarize(&long, 100);
        assert_eq!(summary.chars().count(), 103);
        assert!(summary.ends_with("é..."));
    }

    #[test]
    fn dialog_escapes_user_text() {
        let copy = CopyConfig::default();
        let snapshot = submission("<b>Dupont</b> & fils", "Salut");
        let html = ReviewDialog::new(&snapshot, &copy, 100).render();

        assert!(
            html.as_str()
                .contains("&lt;b&gt;Dupont&lt;/b&gt; &amp; fils")
        );
        assert!(!html.as_str().contains("<b>Dupont"));
    }

    #[test]
    fn dialog_carries_rows_and_controls() {
        let copy = CopyConfig::default();
        let snapshot = submission("Dupont", &"x".repeat(150));
        let html = ReviewDialog::new(&snapshot, &copy, 100).render();
        let html = html.as_str();

        assert!(html.contains(r#"<h2 id="confirm-title">Confirmer votre message</h2>"#));
        assert!(html.contains("<li><strong>Nom :</strong> Dupont</li>"));
        assert!(html.contains("<li><strong>Prénom :</strong> Marie</li>"));
        assert!(html.contains(&format!("{}...", "x".repeat(100))));
        assert!(!html.contains(&"x".repeat(101)));
        assert!(html.contains(r#"id="cancel-btn">Annuler</button>"#));
        assert!(html.contains(r#"id="confirm-btn">Confirmer et envoyer</button>"#));
        assert!(html.contains(r#"aria-label="Fermer""#));
    }

    #[test]
    fn configured_copy_is_escaped_too() {
        let copy = CopyConfig {
            review_title: "Vérifier <maintenant>".into(),
            ..CopyConfig::default()
        };
        let snapshot = submission("Dupont", "Salut");
        let html = ReviewDialog::new(&snapshot, &copy, 100).render();
        assert!(html.as_str().contains("Vérifier &lt;maintenant&gt;"));
    }
}

//! HTML fragments that are safe to hand to `innerHTML`.
//!
//! A [`Markup`] value can only grow through [`Markup::push_text`], which
//! escapes, or through [`Markup::push_trusted`], which only accepts
//! `'static` literals compiled into the binary. User input therefore never
//! reaches the document as markup.

use std::fmt;

/// An HTML fragment built from escaped text and source literals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Start a fragment from a literal written in source.
    pub fn trusted(literal: &'static str) -> Self {
        Markup(literal.to_string())
    }

    /// Append a literal written in source, as is.
    pub fn push_trusted(&mut self, literal: &'static str) -> &mut Self {
        self.0.push_str(literal);
        self
    }

    /// Append `text`, escaped.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        escape_into(&mut self.0, text);
        self
    }

    /// The fragment, ready for `innerHTML`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape the five characters that are significant in HTML text and
/// attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped_but_trusted_literals_are_not() {
        let mut markup = Markup::trusted("<li>");
        markup.push_text("<b>Tom & Jerry</b>").push_trusted("</li>");
        assert_eq!(
            markup.as_str(),
            "<li>&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</li>"
        );
    }

    #[test]
    fn quotes_are_escaped_for_attribute_contexts() {
        assert_eq!(escape_html(r#"O'Brien "Jr""#), "O&#039;Brien &quot;Jr&quot;");
    }

    #[test]
    fn plain_and_accented_text_passes_through() {
        assert_eq!(escape_html("Émilie Dupré"), "Émilie Dupré");
    }
}

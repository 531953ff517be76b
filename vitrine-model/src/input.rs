//! Input events and focus targets, abstracted from any concrete toolkit.

use crate::form::FieldId;

/// Keys the carousel reacts to. Everything else collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Previous slide.
    ArrowLeft,
    /// Next slide.
    ArrowRight,
    /// Toggles autoplay.
    Space,
    /// Toggles autoplay.
    Enter,
    /// Any key the carousel ignores.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            " " | "Spacebar" => Key::Space,
            "Enter" => Key::Enter,
            _ => Key::Other,
        }
    }
}

/// Element a carousel key event was dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CarouselTarget {
    /// The dedicated pause/resume control.
    PauseButton,
    /// Anything else inside the carousel.
    #[default]
    Other,
}

/// Widgets the form controller can move focus to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// A form control.
    Field(FieldId),
    /// The form's submit button.
    SubmitButton,
    /// The cancel button of the review dialog.
    ReviewCancel,
    /// The close control of the success acknowledgment.
    SuccessClose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys_map_to_carousel_keys() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_dom_key("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_dom_key(" "), Key::Space);
        assert_eq!(Key::from_dom_key("Enter"), Key::Enter);
        assert_eq!(Key::from_dom_key("ArrowUp"), Key::Other);
        assert_eq!(Key::from_dom_key("a"), Key::Other);
    }
}

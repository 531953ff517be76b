//! What the carousel controller writes to.

use std::time::Duration;

use vitrine_model::SlideIndex;

/// Label, tooltip and pressed state of the pause/resume control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseControl {
    /// `aria-pressed`: true while autoplay is paused by the user.
    pub pressed: bool,
    /// Visible text.
    pub label: String,
    /// Tooltip.
    pub title: String,
}

/// Widgets the carousel controller drives.
///
/// Slide and indicator collections are fixed once the surface is built; the
/// controller reads their sizes once, at construction.
pub trait CarouselSurface {
    /// Number of slides on the page.
    fn slide_count(&self) -> usize;

    /// Number of indicator dots; zero when the page has none.
    fn indicator_count(&self) -> usize;

    /// Whether the carousel root declares a live region. Announcements are
    /// only emitted when it does.
    fn supports_announcements(&self) -> bool;

    /// Show or hide one slide, keeping `aria-hidden` in step.
    fn set_slide_visible(&mut self, index: SlideIndex, visible: bool);

    /// Mark one indicator active/current or inactive.
    fn set_indicator_active(&mut self, index: SlideIndex, active: bool);

    /// Update the pause/resume control.
    fn set_pause_control(&mut self, control: &PauseControl);

    /// Post a polite status message that removes itself after `ttl`.
    fn announce(&mut self, text: &str, ttl: Duration);

    /// Move focus to the previous-slide control.
    fn focus_previous_control(&mut self);
}

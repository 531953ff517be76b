//! Commands accepted by the carousel controller

use vitrine_model::{CarouselTarget, Key};

/// Everything the carousel reacts to.
#[derive(Clone, PartialEq, Eq)]
pub enum CarouselMessage {
    // Navigation
    /// Show the next slide.
    Next,
    /// Show the previous slide.
    Previous,
    /// Jump to a slide. Any integer is accepted and wrapped into range.
    GoTo(i64),

    // Autoplay
    /// Flip the user-selected autoplay mode (the pause control).
    ToggleAutoPlay,
    /// (Re)start the timer without changing the mode.
    StartAutoPlay,
    /// Stop the timer without changing the mode.
    PauseAutoPlay,
    /// One fire of the autoplay interval.
    Tick,

    // Input
    /// A key pressed inside the carousel, with the element it targeted.
    #[allow(missing_docs)]
    Key { key: Key, target: CarouselTarget },
    /// Pointer entered the carousel.
    PointerEnter,
    /// Pointer left the carousel.
    PointerLeave,
}

impl CarouselMessage {
    /// Stable label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "Carousel::Next",
            Self::Previous => "Carousel::Previous",
            Self::GoTo(_) => "Carousel::GoTo",
            Self::ToggleAutoPlay => "Carousel::ToggleAutoPlay",
            Self::StartAutoPlay => "Carousel::StartAutoPlay",
            Self::PauseAutoPlay => "Carousel::PauseAutoPlay",
            Self::Tick => "Carousel::Tick",
            Self::Key { .. } => "Carousel::Key",
            Self::PointerEnter => "Carousel::PointerEnter",
            Self::PointerLeave => "Carousel::PointerLeave",
        }
    }
}

impl std::fmt::Debug for CarouselMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoTo(index) => write!(f, "Carousel::GoTo({index})"),
            Self::Key { key, target } => {
                write!(f, "Carousel::Key({key:?} on {target:?})")
            }
            other => f.write_str(other.name()),
        }
    }
}

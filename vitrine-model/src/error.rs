//! Errors raised while building model values.

use std::fmt::{self, Display};

/// Errors produced by model constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A carousel needs at least one slide to have a current index.
    EmptyCarousel,
    /// Indicator widgets must pair one-to-one with slides.
    IndicatorMismatch {
        /// Slides found.
        slides: usize,
        /// Indicators found.
        indicators: usize,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::EmptyCarousel => {
                write!(f, "carousel has no slides")
            }
            ModelError::IndicatorMismatch { slides, indicators } => write!(
                f,
                "carousel has {slides} slides but {indicators} indicators"
            ),
        }
    }
}

impl std::error::Error for ModelError {}

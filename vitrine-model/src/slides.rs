//! Slide counts and wrapping slide positions.

use std::num::NonZeroUsize;

use crate::error::ModelError;

/// Number of slides in a carousel. Fixed once the carousel is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideCount(NonZeroUsize);

impl SlideCount {
    /// Fails with [`ModelError::EmptyCarousel`] for zero.
    pub fn new(count: usize) -> Result<Self, ModelError> {
        NonZeroUsize::new(count)
            .map(SlideCount)
            .ok_or(ModelError::EmptyCarousel)
    }

    /// The count as a plain number.
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for SlideCount {
    type Error = ModelError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        SlideCount::new(count)
    }
}

impl std::fmt::Display for SlideCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based position of the active slide.
///
/// The only way to build an index for a given carousel is through
/// [`SlideIndex::wrap`], which folds any signed position back into
/// `[0, count)`. Negative positions count backwards from the last slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideIndex(usize);

impl SlideIndex {
    /// The first slide.
    pub const FIRST: SlideIndex = SlideIndex(0);

    /// Normalize `position` into range: `((position % n) + n) % n`.
    pub fn wrap(position: i64, count: SlideCount) -> Self {
        // Slide counts come from DOM collections and always fit in i64.
        let n = count.get() as i64;
        SlideIndex(position.rem_euclid(n) as usize)
    }

    /// The slide after this one, wrapping past the end.
    pub fn next(self, count: SlideCount) -> Self {
        Self::wrap(self.0 as i64 + 1, count)
    }

    /// The slide before this one, wrapping past the start.
    pub fn previous(self, count: SlideCount) -> Self {
        Self::wrap(self.0 as i64 - 1, count)
    }

    /// Zero-based position.
    pub fn get(&self) -> usize {
        self.0
    }

    /// One-based position, as read out to screen readers.
    pub fn ordinal(&self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

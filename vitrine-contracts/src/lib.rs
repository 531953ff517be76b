//! Trait surfaces that describe what the Vitrine controllers need from a page.
//!
//! The controllers never look anything up on their own. Everything they read
//! or mutate arrives through one of these traits at construction time, which
//! is what lets the same state machines run against the browser DOM in
//! `vitrine-web` and against recording doubles in tests.

pub mod carousel_surface;
pub mod clock;
pub mod form_surface;
pub mod scheduler;
pub mod submission;

/// Frequently used trait combinators for controller and adapter crates.
pub mod prelude {
    pub use super::carousel_surface::{CarouselSurface, PauseControl};
    pub use super::clock::{Clock, SystemClock};
    pub use super::form_surface::FormSurface;
    pub use super::scheduler::{Scheduler, TimerHandle};
    pub use super::submission::SubmissionSink;
}

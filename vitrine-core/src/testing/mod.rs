//! Test doubles for driving the controllers without a browser.
//!
//! - [`RecordingCarouselSurface`] / [`RecordingFormSurface`] keep the state a
//!   real page would show and log every call.
//! - [`ManualScheduler`] runs timers on virtual time.
//! - [`FixedClock`] pins "today".

mod clock;
mod scheduler;
mod surfaces;

pub use clock::FixedClock;
pub use scheduler::{ManualScheduler, TimerDriven, advance};
pub use surfaces::{CarouselCall, FormCall, RecordingCarouselSurface, RecordingFormSurface};

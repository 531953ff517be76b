//! # Vitrine Core
//!
//! State machines behind the Vitrine campaign page.
//!
//! ## Overview
//!
//! - **Carousel**: [`CarouselController`] owns the active slide and the
//!   autoplay timer, reacts to navigation, keyboard and hover input, and keeps
//!   slides, indicators, the pause control and the live region in step.
//! - **Contact form**: [`FormController`] validates the name and birth-date
//!   fields as the user types, gates submission, and walks the
//!   review → confirm → success flow.
//!
//! The two controllers share nothing. Each is driven by a single `update`
//! function fed with messages, and each writes to the page only through the
//! trait surfaces in `vitrine-contracts`.
//!
//! ## Example
//!
//! ```ignore
//! use vitrine_config::PageConfig;
//! use vitrine_core::carousel::{CarouselController, CarouselMessage};
//! use vitrine_core::testing::{ManualScheduler, RecordingCarouselSurface};
//!
//! let config = PageConfig::default();
//! let mut carousel = CarouselController::new(
//!     RecordingCarouselSurface::new(3),
//!     ManualScheduler::default(),
//!     &config,
//! )
//! .expect("three slides");
//! carousel.mount();
//!
//! carousel.update(CarouselMessage::GoTo(-1));
//! assert_eq!(carousel.current_index().get(), 2);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Accessible carousel with autoplay
pub mod carousel;

/// Contact form validation and submission flow
pub mod form;

/// Result of feeding an input event to a controller
pub mod outcome;

/// Submission sinks shipped with the core
pub mod sink;

/// Recording surfaces, virtual-time scheduler and fixed clock
#[cfg(any(test, feature = "testing"))]
#[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
pub mod testing;

pub use carousel::{CarouselController, CarouselMessage};
pub use form::{FieldValidity, FormController, FormMessage, ValidationError};
pub use outcome::EventOutcome;
pub use sink::LogSubmissionSink;

//! Core data model definitions shared across Vitrine crates.

pub mod error;
pub mod form;
pub mod input;
pub mod markup;
pub mod prelude;
pub mod slides;

pub use error::ModelError;
pub use form::{
    CampaignChoice, FieldId, FormPhase, FormValues, Submission,
};
pub use input::{CarouselTarget, FocusTarget, Key};
pub use markup::{Markup, escape_html};
pub use slides::{SlideCount, SlideIndex};

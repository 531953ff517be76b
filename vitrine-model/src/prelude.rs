//! Common model types in one import.

pub use crate::error::ModelError;
pub use crate::form::{
    CampaignChoice, FieldId, FormPhase, FormValues, Submission,
};
pub use crate::input::{CarouselTarget, FocusTarget, Key};
pub use crate::slides::{SlideCount, SlideIndex};
pub use crate::markup::Markup;

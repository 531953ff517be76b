//! Shared configuration library for Vitrine.
//!
//! Every tunable of the page controllers lives here: autoplay and transient
//! message timings, the birth-year window, and the French copy shown to
//! users. Defaults match the shipped campaign page, so a page that carries
//! no configuration at all behaves as designed.
//! Overrides come from TOML or JSON, either a file on native hosts or the
//! `data-vitrine-config` attribute in the browser.

/// Parsing and resolution of configuration documents
pub mod loader;
/// Configuration sections and their defaults
pub mod models;
pub mod validation;

pub use loader::{ConfigError, ConfigSource};
pub use models::{CarouselConfig, CopyConfig, FormConfig, PageConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};

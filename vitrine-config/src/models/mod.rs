mod carousel;
mod copy;
mod form;

pub use carousel::CarouselConfig;
pub use copy::CopyConfig;
pub use form::FormConfig;

use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_LOG_FILTER: &str = "vitrine=info";

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Top-level page configuration. Every section falls back to its defaults
/// when omitted, so partial documents are valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PageConfig {
    /// `EnvFilter` directive used when the browser adapter installs its
    /// tracing subscriber.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Carousel timings.
    pub carousel: CarouselConfig,
    /// Contact form timings and bounds.
    pub form: FormConfig,
    /// User-facing text.
    pub copy: CopyConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            carousel: CarouselConfig::default(),
            form: FormConfig::default(),
            copy: CopyConfig::default(),
        }
    }
}

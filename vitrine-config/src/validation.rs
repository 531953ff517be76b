//! Guard rails for page configuration.
//!
//! Hard errors describe settings the controllers cannot run with. Warnings
//! describe settings that work but probably are not what the author meant.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::models::PageConfig;

/// Settings the controllers cannot run with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ConfigGuardRailError {
    #[error("carousel.autoplay_interval_ms must be greater than zero")]
    ZeroAutoplayInterval,

    #[error(
        "form.min_birth_year ({min}) must not be greater than form.max_birth_year ({max})"
    )]
    InvertedBirthYears { min: i32, max: i32 },

    #[error("copy.{key} must not be empty")]
    EmptyCopy { key: &'static str },
}

/// Settings that work but are probably a mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ConfigWarning {
    /// Announcements outlive the slide they describe, so consecutive ones
    /// overlap in the live region.
    AnnouncementOutlivesSlide {
        announcement_ttl: Duration,
        autoplay_interval: Duration,
    },
    /// The form resets before the user can read the success notification.
    ResetBeforeNotificationExpires {
        reset_delay: Duration,
        notification_ttl: Duration,
    },
    /// A zero limit hides the message entirely in the review summary.
    EmptyMessageSummary,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::AnnouncementOutlivesSlide {
                announcement_ttl,
                autoplay_interval,
            } => write!(
                f,
                "slide announcements live for {} but slides advance every {}",
                humantime::format_duration(*announcement_ttl),
                humantime::format_duration(*autoplay_interval),
            ),
            ConfigWarning::ResetBeforeNotificationExpires {
                reset_delay,
                notification_ttl,
            } => write!(
                f,
                "form resets after {} while the success notification stays for {}",
                humantime::format_duration(*reset_delay),
                humantime::format_duration(*notification_ttl),
            ),
            ConfigWarning::EmptyMessageSummary => write!(
                f,
                "form.summary_message_limit is 0; the review summary will show no message text"
            ),
        }
    }
}

/// Non-fatal findings from [`PageConfig::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    /// Whether there is nothing to report.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Warnings in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }

    /// Whether `warning` was reported.
    pub fn contains(&self, warning: &ConfigWarning) -> bool {
        self.0.contains(warning)
    }

    fn push(&mut self, warning: ConfigWarning) {
        self.0.push(warning);
    }
}

impl PageConfig {
    /// Check the guard rails and collect warnings.
    pub fn validate(&self) -> Result<ConfigWarnings, ConfigGuardRailError> {
        let carousel = &self.carousel;
        let form = &self.form;

        if carousel.autoplay_interval_ms == 0 {
            return Err(ConfigGuardRailError::ZeroAutoplayInterval);
        }
        if form.min_birth_year > form.max_birth_year {
            return Err(ConfigGuardRailError::InvertedBirthYears {
                min: form.min_birth_year,
                max: form.max_birth_year,
            });
        }
        for (key, value) in [
            ("slide_announcement", &self.copy.slide_announcement),
            ("pause_label", &self.copy.pause_label),
            ("resume_label", &self.copy.resume_label),
            ("name_error", &self.copy.name_error),
            ("birth_date_error", &self.copy.birth_date_error),
            ("review_confirm_label", &self.copy.review_confirm_label),
            ("review_cancel_label", &self.copy.review_cancel_label),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigGuardRailError::EmptyCopy { key });
            }
        }

        let mut warnings = ConfigWarnings::default();
        if carousel.announcement_ttl_ms > carousel.autoplay_interval_ms {
            warnings.push(ConfigWarning::AnnouncementOutlivesSlide {
                announcement_ttl: carousel.announcement_ttl(),
                autoplay_interval: carousel.autoplay_interval(),
            });
        }
        if form.reset_delay_ms > form.notification_ttl_ms {
            warnings.push(ConfigWarning::ResetBeforeNotificationExpires {
                reset_delay: form.reset_delay(),
                notification_ttl: form.notification_ttl(),
            });
        }
        if form.summary_message_limit == 0 {
            warnings.push(ConfigWarning::EmptyMessageSummary);
        }
        Ok(warnings)
    }
}

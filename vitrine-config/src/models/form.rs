use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Contact form timings and validation bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormConfig {
    /// Lifetime of the "message validated" notification (ms).
    pub notification_ttl_ms: u64,
    /// Delay between confirming and resetting the form (ms).
    pub reset_delay_ms: u64,
    /// Earliest accepted birth year, inclusive.
    pub min_birth_year: i32,
    /// Latest accepted birth year, inclusive.
    pub max_birth_year: i32,
    /// Characters of the message shown in the review summary before it is
    /// cut off with an ellipsis.
    pub summary_message_limit: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            notification_ttl_ms: 5_000,
            reset_delay_ms: 1_000,
            min_birth_year: 1900,
            max_birth_year: 2025,
            summary_message_limit: 100,
        }
    }
}

impl FormConfig {
    /// Lifetime of the success notification.
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    /// Delay before the form resets after a confirmation.
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

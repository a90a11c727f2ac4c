//! User-editable settings for view tracking.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Bounds for [`Options::update_delay`], in seconds.
pub const UPDATE_DELAY_RANGE: (u32, u32) = (1, 60);

/// Bounds for [`Options::save_count`].
pub const SAVE_COUNT_RANGE: (usize, usize) = (1, 50);

/// Settings read from the host's preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Seconds between two view samples. This is also the minimum dwell time.
    pub update_delay: u32,

    /// Maximum number of entries kept in the recent history.
    pub save_count: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            update_delay: 2,
            save_count: 10,
        }
    }
}

impl Options {
    /// Parses options from JSON, filling missing fields with defaults and
    /// clamping out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Options = serde_json::from_str(json)?;
        Ok(options.clamped())
    }

    /// Returns a copy with every field forced into its valid range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.set_update_delay(self.update_delay);
        self.set_save_count(self.save_count);
        self
    }

    /// Sets the sampling interval, clamped to [`UPDATE_DELAY_RANGE`].
    pub fn set_update_delay(&mut self, seconds: u32) {
        self.update_delay = seconds.clamp(UPDATE_DELAY_RANGE.0, UPDATE_DELAY_RANGE.1);
    }

    /// Sets the recent history capacity, clamped to [`SAVE_COUNT_RANGE`].
    pub fn set_save_count(&mut self, count: usize) {
        self.save_count = count.clamp(SAVE_COUNT_RANGE.0, SAVE_COUNT_RANGE.1);
    }

    /// The sampling interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.update_delay))
    }
}

//! Uploader configuration.
//!
//! The defaults reproduce the widget's stock behavior: a 200 ms progress
//! tick, random increments below 30 %, a one second fade-out of finished
//! progress bars and a 10 MB per-file limit.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// The only media type the widget accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Interval between two simulated progress ticks (ms).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Exclusive upper bound of a single progress increment (percent).
pub const DEFAULT_MAX_INCREMENT: f64 = 30.0;

/// Delay before a finished progress row is dropped (ms).
pub const DEFAULT_CLEANUP_DELAY_MS: u64 = 1000;

/// Maximum accepted file size (bytes).
///
/// 10 MB limit.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum rejection notices kept for display.
pub const DEFAULT_MAX_REJECTION_NOTICES: usize = 5;

/// Tunables for acceptance and progress simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploaderConfig {
    /// Milliseconds between progress ticks.
    pub tick_interval_ms: u64,
    /// Increments are drawn uniformly from `[0, max_increment)`.
    pub max_increment: f64,
    /// Milliseconds a completed progress row lingers.
    pub cleanup_delay_ms: u64,
    /// Largest accepted file, in bytes.
    pub max_file_size: u64,
    /// Exact media type a file must declare.
    pub accepted_media_type: String,
    /// How many rejection notices are kept (oldest dropped first).
    pub max_rejection_notices: usize,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            max_increment: DEFAULT_MAX_INCREMENT,
            cleanup_delay_ms: DEFAULT_CLEANUP_DELAY_MS,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            accepted_media_type: PDF_MEDIA_TYPE.to_string(),
            max_rejection_notices: DEFAULT_MAX_REJECTION_NOTICES,
        }
    }
}

impl UploaderConfig {
    /// Check that the values allow every upload to finish.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if !self.max_increment.is_finite() || self.max_increment <= 0.0 {
            return Err(ConfigError::InvalidIncrement(self.max_increment));
        }
        if self.max_file_size == 0 {
            return Err(ConfigError::ZeroSizeLimit);
        }
        if self.accepted_media_type.trim().is_empty() {
            return Err(ConfigError::EmptyMediaType);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn cleanup_delay(&self) -> Duration {
        Duration::from_millis(self.cleanup_delay_ms)
    }
}

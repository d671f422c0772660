//! Error types for the PDF Drop core.
//!
//! - [`RejectReason`] - Why a dropped or picked file was not accepted
//! - [`ConfigError`] - Invalid uploader configuration
//! - [`SimulationError`] - Simulated upload task failures
//!
//! Rejections are not fatal: they are collected and shown to the user
//! next to the file list, while the rest of the batch goes through.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::format_file_size;

// =============================================================================
// Acceptance Errors
// =============================================================================

/// Reason a candidate file was discarded at acceptance time.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectReason {
    /// Declared media type is not exactly the accepted PDF type.
    #[error("not a PDF file (type: {})", display_media_type(.media_type))]
    NotPdf { media_type: String },

    /// File is larger than the configured limit.
    #[error("file is {} but the limit is {}", human_size(.size), human_size(.limit))]
    TooLarge { size: u64, limit: u64 },
}

fn human_size(bytes: &u64) -> String {
    format_file_size(*bytes)
}

fn display_media_type(media_type: &str) -> &str {
    if media_type.is_empty() {
        "unknown"
    } else {
        media_type
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors returned by [`crate::UploaderConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The progress timer would spin without delay.
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,

    /// Increments must be finite and strictly positive or uploads never finish.
    #[error("max increment must be a positive finite number, got {0}")]
    InvalidIncrement(f64),

    /// A zero size limit would reject every file.
    #[error("max file size must be greater than zero")]
    ZeroSizeLimit,

    /// Accepted media type is blank.
    #[error("accepted media type must not be empty")]
    EmptyMediaType,
}

// =============================================================================
// Simulation Errors
// =============================================================================

/// Errors from a per-entry simulation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The task was cancelled, usually because its entry was removed.
    #[error("simulation aborted")]
    Aborted,
}

impl From<futures::future::Aborted> for SimulationError {
    fn from(_: futures::future::Aborted) -> Self {
        SimulationError::Aborted
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for simulation tasks.
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_pdf_message() {
        let err = RejectReason::NotPdf {
            media_type: "text/plain".into(),
        };
        assert_eq!(err.to_string(), "not a PDF file (type: text/plain)");

        let err = RejectReason::NotPdf {
            media_type: String::new(),
        };
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn test_too_large_message_uses_human_sizes() {
        let err = RejectReason::TooLarge {
            size: 15 * 1024 * 1024,
            limit: 10 * 1024 * 1024,
        };
        assert_eq!(err.to_string(), "file is 15 MB but the limit is 10 MB");
    }

    #[test]
    fn test_aborted_conversion() {
        let err: SimulationError = futures::future::Aborted.into();
        assert_eq!(err, SimulationError::Aborted);
    }
}

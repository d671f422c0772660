//! # PDF Drop core - upload list state and simulated progress
//!
//! Everything the PDF Drop widget does, minus the browser: filtering
//! dropped files, keeping the list and its progress table, and animating
//! a fake upload for each accepted PDF.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Drop / Picker│────▶│    accept    │────▶│ UploadState  │────▶│   Summary    │
//! │ (candidates) │     │ (PDF, ≤10MB) │     │ (entries +   │     │ (derived on  │
//! └──────────────┘     └──────────────┘     │  progress)   │     │  render)     │
//!                                           └──────▲───────┘     └──────────────┘
//!                                                  │ tick / clear
//!                                           ┌──────┴───────┐
//!                                           │  simulate    │ one abortable task
//!                                           │ (Timer+Rng)  │ per entry
//!                                           └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use pdfdrop::{FileCandidate, UploadState, TickOutcome};
//!
//! let mut state = UploadState::default();
//! let outcome = state.accept(vec![
//!     FileCandidate::detached("a.pdf", "application/pdf", 2048),
//!     FileCandidate::detached("b.txt", "text/plain", 100),
//! ]);
//! assert_eq!(outcome.accepted.len(), 1);
//!
//! let id = outcome.accepted[0];
//! state.start_progress(id);
//! assert_eq!(state.tick(id, 120.0), TickOutcome::Completed);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Rejection, configuration and task errors
//! - [`models`] - Entries, ids, statuses, summary
//! - [`config`] - Tunables and defaults
//! - [`format`] - Human-readable sizes
//! - [`state`] - The state container and its transitions
//! - [`simulator`] - Fake progress tasks and their registry

// Core modules
pub mod error;
pub mod models;
pub mod config;

// Presentation helpers
pub mod format;

// State machine
pub mod state;

// Progress simulation
pub mod simulator;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    ConfigError, ConfigResult, RejectReason, SimulationError, SimulationResult,
};

pub use models::{
    AcceptOutcome, EntryId, FileCandidate, Rejection, Summary, TickOutcome, UploadEntry,
    UploadStatus,
};

pub use config::{UploaderConfig, PDF_MEDIA_TYPE};

pub use format::format_file_size;

pub use state::{UploadState, PROGRESS_COMPLETE};

pub use simulator::{
    simulate, ProgressSink, ProgressSource, RandomIncrements, ScriptedIncrements,
    SimulationEnd, SimulationTasks, Timer,
};

/// Boxed local future returned by [`Timer::sleep`].
pub use futures::future::LocalBoxFuture;

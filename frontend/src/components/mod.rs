//! UI Components for the PDF uploader widget.
//!
//! # Layout Components
//! - [`Hero`] - Title and tagline
//! - [`EmptyState`] - Placeholder while no file has been added
//!
//! # Feature Components
//! - [`UploadSection`] - Drop zone with drag & drop and file picker
//! - [`RejectionNotices`] - Why some files were not added
//! - [`FileListSection`] - Accepted files with status and remove control
//! - [`ProgressBar`] - Simulated upload progress of one file
//! - [`SummaryBar`] - Total files, completed files and total size

mod hero;
mod empty_state;
mod upload;
mod notices;
mod file_list;
mod progress;
mod summary;

pub use hero::*;
pub use empty_state::*;
pub use upload::*;
pub use notices::*;
pub use file_list::*;
pub use progress::*;
pub use summary::*;

//! Browser-side services for the uploader widget.
//!
//! # Services
//!
//! - [`files`] - `web_sys::File` / `FileList` to upload candidates
//! - [`simulation`] - Widget state signal, simulated uploads and their
//!   cancellation

pub mod files;
pub mod simulation;

pub use files::*;
pub use simulation::*;

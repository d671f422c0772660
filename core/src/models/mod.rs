//! Domain models for the upload list.
//!
//! - [`EntryId`] - Opaque identifier of an accepted file
//! - [`FileCandidate`] - A file handed over by a drop or the file picker
//! - [`UploadEntry`] - An accepted file shown in the list
//! - [`UploadStatus`] - Lifecycle of an entry
//! - [`Rejection`] - A discarded candidate with its reason
//! - [`Summary`] - Aggregate counters shown under the list
//!
//! Entries and candidates are generic over `H`, the platform file handle
//! (a `web_sys::File` in the browser). The handle is carried along and
//! never inspected by the core.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RejectReason;

// =============================================================================
// Identifiers
// =============================================================================

/// Unique identifier of an [`UploadEntry`].
///
/// Generated at acceptance time and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Fresh random identifier.
    pub fn new() -> Self {
        EntryId(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

// =============================================================================
// Status
// =============================================================================

/// Lifecycle of an entry. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    /// Accepted, simulation not started yet.
    Pending,
    /// Simulated progress running.
    Uploading,
    /// Progress reached 100 %.
    Completed,
}

impl UploadStatus {
    /// Icon shown in front of the file name.
    pub fn icon(&self) -> &'static str {
        match self {
            UploadStatus::Pending => "📄",
            UploadStatus::Uploading => "⏳",
            UploadStatus::Completed => "✅",
        }
    }

    /// Badge label, if the status shows one.
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            UploadStatus::Pending => None,
            UploadStatus::Uploading => Some("Uploading..."),
            UploadStatus::Completed => Some("Completed"),
        }
    }

    /// CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadStatus::Pending => "status-pending",
            UploadStatus::Uploading => "status-uploading",
            UploadStatus::Completed => "status-completed",
        }
    }
}

// =============================================================================
// Files
// =============================================================================

/// A file offered by the platform, before filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct FileCandidate<H = ()> {
    /// File name at selection time
    pub name: String,
    /// Declared media (MIME) type, possibly empty
    pub media_type: String,
    /// Size in bytes
    pub size: u64,
    /// Platform file handle
    pub handle: H,
}

impl FileCandidate<()> {
    /// Candidate without a platform handle, handy outside the browser.
    pub fn detached(name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
            handle: (),
        }
    }
}

/// One accepted file in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadEntry<H = ()> {
    pub id: EntryId,
    pub name: String,
    pub size: u64,
    pub status: UploadStatus,
    pub handle: H,
}

impl<H> UploadEntry<H> {
    pub(crate) fn from_candidate(candidate: FileCandidate<H>) -> Self {
        Self {
            id: EntryId::new(),
            name: candidate.name,
            size: candidate.size,
            status: UploadStatus::Pending,
            handle: candidate.handle,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == UploadStatus::Completed
    }
}

/// A candidate that did not make it into the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// File name as offered
    pub name: String,
    pub reason: RejectReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.reason)
    }
}

// =============================================================================
// Transition results
// =============================================================================

/// Result of [`crate::UploadState::accept`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptOutcome {
    /// Ids of the new entries, in insertion order.
    pub accepted: Vec<EntryId>,
    /// Discarded candidates.
    pub rejected: Vec<Rejection>,
}

/// Result of a single progress tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Progress moved, still below 100.
    Progressed(f64),
    /// Progress reached 100 and the entry is now completed.
    Completed,
    /// No uploading entry with that id; nothing changed.
    Ignored,
}

// =============================================================================
// Summary
// =============================================================================

/// Aggregate counters, derived from the list on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_files: usize,
    pub completed: usize,
    /// Sum of all entry sizes in bytes
    pub total_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ids_are_unique() {
        let a = EntryId::new();
        let b = EntryId::new();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), 32);
    }

    #[test]
    fn test_status_presentation() {
        assert_eq!(UploadStatus::Pending.badge(), None);
        assert_eq!(UploadStatus::Uploading.badge(), Some("Uploading..."));
        assert_eq!(UploadStatus::Completed.icon(), "✅");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&UploadStatus::Uploading).unwrap();
        assert_eq!(json, "\"uploading\"");
    }

    #[test]
    fn test_entry_starts_pending() {
        let entry = UploadEntry::from_candidate(FileCandidate::detached(
            "a.pdf",
            "application/pdf",
            2048,
        ));
        assert_eq!(entry.status, UploadStatus::Pending);
        assert_eq!(entry.name, "a.pdf");
        assert_eq!(entry.size, 2048);
        assert!(!entry.is_completed());
    }
}

//! The upload list state container.
//!
//! [`UploadState`] owns everything the widget renders: the entry list in
//! insertion order, the progress table, the drag flag and the pending
//! rejection notices. Every change goes through one of the transition
//! methods below, so the whole lifecycle can be driven without a browser.
//!
//! ```text
//!  accept ──▶ Pending ──start_progress──▶ Uploading ──tick (≥100)──▶ Completed
//!                                            │  ▲                        │
//!                                            └──┘ tick (<100)            ▼
//!                                                               clear_progress
//! ```
//!
//! `remove` can happen at any point and drops both the entry and its
//! progress row.

use std::collections::HashMap;

use crate::config::UploaderConfig;
use crate::error::RejectReason;
use crate::models::{
    AcceptOutcome, EntryId, FileCandidate, Rejection, Summary, TickOutcome, UploadEntry,
    UploadStatus,
};

/// Upper bound of the progress percentage.
pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Upload list, progress table and drop-zone flags.
#[derive(Debug, Clone)]
pub struct UploadState<H = ()> {
    config: UploaderConfig,
    entries: Vec<UploadEntry<H>>,
    progress: HashMap<EntryId, f64>,
    rejections: Vec<Rejection>,
    dragging: bool,
}

impl<H> Default for UploadState<H> {
    fn default() -> Self {
        Self::new(UploaderConfig::default())
    }
}

impl<H> UploadState<H> {
    pub fn new(config: UploaderConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            progress: HashMap::new(),
            rejections: Vec::new(),
            dragging: false,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn config(&self) -> &UploaderConfig {
        &self.config
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[UploadEntry<H>] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&UploadEntry<H>> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Displayed percentage for an entry, `0.0` when there is no row.
    pub fn progress_of(&self, id: EntryId) -> f64 {
        self.progress.get(&id).copied().unwrap_or(0.0)
    }

    /// Raw progress row, if one exists.
    pub fn progress_row(&self, id: EntryId) -> Option<f64> {
        self.progress.get(&id).copied()
    }

    /// Number of rows in the progress table.
    pub fn progress_rows(&self) -> usize {
        self.progress.len()
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Counters shown under the list.
    pub fn summary(&self) -> Summary {
        Summary {
            total_files: self.entries.len(),
            completed: self.entries.iter().filter(|e| e.is_completed()).count(),
            total_size: self.entries.iter().map(|e| e.size).sum(),
        }
    }

    // =========================================================================
    // Acceptance
    // =========================================================================

    /// Filter candidates and append the accepted ones as `Pending` entries.
    ///
    /// No deduplication: the same file dropped twice yields two entries.
    pub fn accept<I>(&mut self, candidates: I) -> AcceptOutcome
    where
        I: IntoIterator<Item = FileCandidate<H>>,
    {
        let mut outcome = AcceptOutcome::default();

        for candidate in candidates {
            match self.check(&candidate) {
                Ok(()) => {
                    let entry = UploadEntry::from_candidate(candidate);
                    log::info!("📄 Accepted {} ({} bytes) as {}", entry.name, entry.size, entry.id);
                    outcome.accepted.push(entry.id);
                    self.entries.push(entry);
                }
                Err(reason) => {
                    log::warn!("Rejected {}: {}", candidate.name, reason);
                    outcome.rejected.push(Rejection {
                        name: candidate.name,
                        reason,
                    });
                }
            }
        }

        for rejection in &outcome.rejected {
            self.push_rejection(rejection.clone());
        }

        outcome
    }

    fn check(&self, candidate: &FileCandidate<H>) -> Result<(), RejectReason> {
        if candidate.media_type != self.config.accepted_media_type {
            return Err(RejectReason::NotPdf {
                media_type: candidate.media_type.clone(),
            });
        }
        if candidate.size > self.config.max_file_size {
            return Err(RejectReason::TooLarge {
                size: candidate.size,
                limit: self.config.max_file_size,
            });
        }
        Ok(())
    }

    fn push_rejection(&mut self, rejection: Rejection) {
        self.rejections.push(rejection);
        let max = self.config.max_rejection_notices;
        if self.rejections.len() > max {
            let excess = self.rejections.len() - max;
            self.rejections.drain(..excess);
        }
    }

    /// Remove one rejection notice by position.
    pub fn dismiss_rejection(&mut self, index: usize) -> Option<Rejection> {
        (index < self.rejections.len()).then(|| self.rejections.remove(index))
    }

    pub fn clear_rejections(&mut self) {
        self.rejections.clear();
    }

    // =========================================================================
    // Progress
    // =========================================================================

    /// Move a `Pending` entry to `Uploading` and open its progress row at 0.
    ///
    /// Returns `false` if the entry is gone or already started.
    pub fn start_progress(&mut self, id: EntryId) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if entry.status != UploadStatus::Pending {
            return false;
        }
        entry.status = UploadStatus::Uploading;
        self.progress.insert(id, 0.0);
        true
    }

    /// Add `increment` to an uploading entry's progress.
    ///
    /// The stored value is clamped to 100; reaching it completes the entry.
    /// Negative or NaN increments count as zero so progress never goes back.
    pub fn tick(&mut self, id: EntryId, increment: f64) -> TickOutcome {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return TickOutcome::Ignored;
        };
        if entry.status != UploadStatus::Uploading {
            return TickOutcome::Ignored;
        }

        let increment = if increment.is_nan() { 0.0 } else { increment.max(0.0) };
        let row = self.progress.entry(id).or_insert(0.0);
        let total = *row + increment;

        if total >= PROGRESS_COMPLETE {
            *row = PROGRESS_COMPLETE;
            entry.status = UploadStatus::Completed;
            log::debug!("✅ {} completed", entry.name);
            TickOutcome::Completed
        } else {
            *row = total;
            TickOutcome::Progressed(total)
        }
    }

    /// Mark an entry completed regardless of its progress.
    ///
    /// An open progress row is filled to 100 so the bar matches the status;
    /// the running simulation drops it on its next tick.
    /// Idempotent. Returns `false` if the entry does not exist.
    pub fn complete(&mut self, id: EntryId) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.status = UploadStatus::Completed;
                if let Some(row) = self.progress.get_mut(&id) {
                    *row = PROGRESS_COMPLETE;
                }
                true
            }
            None => false,
        }
    }

    /// Drop the progress row of an entry.
    pub fn clear_progress(&mut self, id: EntryId) -> Option<f64> {
        self.progress.remove(&id)
    }

    // =========================================================================
    // Removal / drop zone
    // =========================================================================

    /// Remove an entry and its progress row, whatever its status.
    pub fn remove(&mut self, id: EntryId) -> Option<UploadEntry<H>> {
        self.progress.remove(&id);
        let index = self.entries.iter().position(|e| e.id == id)?;
        let entry = self.entries.remove(index);
        log::debug!("🗑️ Removed {} ({})", entry.name, entry.id);
        Some(entry)
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn pdf(name: &str, size: u64) -> FileCandidate {
        FileCandidate::detached(name, "application/pdf", size)
    }

    fn started(state: &mut UploadState, name: &str) -> EntryId {
        let id = state.accept(vec![pdf(name, 1024)]).accepted[0];
        assert!(state.start_progress(id));
        id
    }

    #[test]
    fn test_accept_filters_on_exact_media_type() {
        let mut state = UploadState::default();
        let outcome = state.accept(vec![
            pdf("a.pdf", 2048),
            FileCandidate::detached("b.txt", "text/plain", 100),
            FileCandidate::detached("c.pdf", "application/PDF", 10),
            FileCandidate::detached("d.pdf", "", 10),
            pdf("e.pdf", 1),
        ]);

        assert_eq!(outcome.accepted.len(), 2);
        assert_eq!(outcome.rejected.len(), 3);
        assert_eq!(state.entries().len(), 2);
        assert_eq!(state.entries()[0].name, "a.pdf");
        assert_eq!(state.entries()[1].name, "e.pdf");
        assert!(state.entries().iter().all(|e| e.status == UploadStatus::Pending));
        assert_eq!(
            outcome.rejected[0].reason,
            RejectReason::NotPdf {
                media_type: "text/plain".into()
            }
        );
    }

    #[test]
    fn test_accept_enforces_size_limit() {
        let mut state = UploadState::default();
        let limit = state.config().max_file_size;
        let outcome = state.accept(vec![pdf("ok.pdf", limit), pdf("big.pdf", limit + 1)]);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(
            outcome.rejected[0].reason,
            RejectReason::TooLarge {
                size: limit + 1,
                limit
            }
        );
        assert_eq!(state.rejections().len(), 1);
    }

    #[test]
    fn test_accept_appends_without_dedup() {
        let mut state = UploadState::default();
        let first = state.accept(vec![pdf("a.pdf", 10)]);
        let second = state.accept(vec![pdf("a.pdf", 10), pdf("b.pdf", 20)]);

        let names: Vec<_> = state.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "a.pdf", "b.pdf"]);
        assert_ne!(first.accepted[0], second.accepted[0]);
        assert_eq!(state.entries()[2].id, second.accepted[1]);
    }

    #[test]
    fn test_rejection_notices_are_capped() {
        let mut state = UploadState::default();
        let max = state.config().max_rejection_notices;
        let junk: Vec<_> = (0..max + 3)
            .map(|i| FileCandidate::detached(format!("{}.txt", i), "text/plain", 1))
            .collect();
        state.accept(junk);

        assert_eq!(state.rejections().len(), max);
        assert_eq!(state.rejections()[0].name, "3.txt");

        let dismissed = state.dismiss_rejection(0).unwrap();
        assert_eq!(dismissed.name, "3.txt");
        assert_eq!(state.rejections().len(), max - 1);
        assert!(state.dismiss_rejection(99).is_none());

        state.clear_rejections();
        assert!(state.rejections().is_empty());
    }

    #[test]
    fn test_start_progress_only_once() {
        let mut state = UploadState::default();
        let id = state.accept(vec![pdf("a.pdf", 10)]).accepted[0];

        assert!(state.start_progress(id));
        assert_eq!(state.entry(id).unwrap().status, UploadStatus::Uploading);
        assert_eq!(state.progress_row(id), Some(0.0));
        assert!(!state.start_progress(id));
        assert!(!state.start_progress(EntryId::new()));
    }

    #[test]
    fn test_tick_accumulates_and_clamps() {
        let mut state = UploadState::default();
        let id = started(&mut state, "a.pdf");

        assert_eq!(state.tick(id, 25.0), TickOutcome::Progressed(25.0));
        assert_eq!(state.tick(id, 29.5), TickOutcome::Progressed(54.5));
        assert_eq!(state.tick(id, 0.0), TickOutcome::Progressed(54.5));
        assert_eq!(state.tick(id, 29.0), TickOutcome::Progressed(83.5));
        assert_eq!(state.tick(id, 29.0), TickOutcome::Completed);

        assert_eq!(state.progress_of(id), 100.0);
        assert_eq!(state.entry(id).unwrap().status, UploadStatus::Completed);
    }

    #[test]
    fn test_exactly_one_hundred_completes() {
        let mut state = UploadState::default();
        let id = started(&mut state, "a.pdf");
        state.tick(id, 70.0);
        assert_eq!(state.tick(id, 30.0), TickOutcome::Completed);
    }

    #[test]
    fn test_completed_never_reverts() {
        let mut state = UploadState::default();
        let id = started(&mut state, "a.pdf");
        state.tick(id, 150.0);

        assert_eq!(state.tick(id, 10.0), TickOutcome::Ignored);
        assert!(!state.start_progress(id));
        assert!(state.complete(id));
        assert_eq!(state.entry(id).unwrap().status, UploadStatus::Completed);
    }

    #[test]
    fn test_complete_while_uploading_fills_row() {
        let mut state = UploadState::default();
        let id = started(&mut state, "a.pdf");
        state.tick(id, 10.0);

        assert!(state.complete(id));
        assert_eq!(state.entry(id).unwrap().status, UploadStatus::Completed);
        assert_eq!(state.progress_row(id), Some(100.0));
        assert_eq!(state.tick(id, 10.0), TickOutcome::Ignored);
        assert!(!state.complete(EntryId::new()));
    }

    #[test]
    fn test_tick_ignores_bad_increments_and_unknown_ids() {
        let mut state = UploadState::default();
        let id = started(&mut state, "a.pdf");
        state.tick(id, 10.0);

        assert_eq!(state.tick(id, -5.0), TickOutcome::Progressed(10.0));
        assert_eq!(state.tick(id, f64::NAN), TickOutcome::Progressed(10.0));
        assert_eq!(state.tick(EntryId::new(), 10.0), TickOutcome::Ignored);

        let pending = state.accept(vec![pdf("b.pdf", 1)]).accepted[0];
        assert_eq!(state.tick(pending, 10.0), TickOutcome::Ignored);
        assert_eq!(state.progress_row(pending), None);
    }

    #[test]
    fn test_progress_is_monotonic_until_completion() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut state = UploadState::default();
            let id = started(&mut state, "a.pdf");
            let mut last = 0.0;
            let mut ticks = 0;
            loop {
                ticks += 1;
                match state.tick(id, rng.gen_range(0.0..30.0)) {
                    TickOutcome::Progressed(pct) => {
                        assert!(pct >= last);
                        assert!(pct < 100.0);
                        last = pct;
                    }
                    TickOutcome::Completed => break,
                    TickOutcome::Ignored => panic!("uploading entry ignored"),
                }
                assert!(ticks < 10_000);
            }
            assert!(state.progress_of(id) <= 100.0);
        }
    }

    #[test]
    fn test_remove_only_touches_target() {
        let mut state = UploadState::default();
        let a = started(&mut state, "a.pdf");
        let b = started(&mut state, "b.pdf");
        let c = started(&mut state, "c.pdf");
        state.tick(a, 10.0);
        state.tick(b, 20.0);
        state.tick(c, 30.0);

        let removed = state.remove(b).unwrap();
        assert_eq!(removed.name, "b.pdf");
        assert!(state.entry(b).is_none());
        assert_eq!(state.progress_row(b), None);

        assert_eq!(state.progress_of(a), 10.0);
        assert_eq!(state.progress_of(c), 30.0);
        let names: Vec<_> = state.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "c.pdf"]);

        assert!(state.remove(b).is_none());
        assert_eq!(state.tick(b, 10.0), TickOutcome::Ignored);
        assert_eq!(state.progress_rows(), 2);
    }

    #[test]
    fn test_clear_progress_keeps_entry() {
        let mut state = UploadState::default();
        let id = started(&mut state, "a.pdf");
        state.tick(id, 100.0);

        assert_eq!(state.clear_progress(id), Some(100.0));
        assert_eq!(state.progress_row(id), None);
        assert_eq!(state.progress_of(id), 0.0);
        assert!(state.entry(id).unwrap().is_completed());
    }

    #[test]
    fn test_summary() {
        let mut state = UploadState::default();
        assert_eq!(state.summary(), Summary::default());

        let ids = state
            .accept(vec![pdf("a.pdf", 2048), pdf("b.pdf", 1024)])
            .accepted;
        state.start_progress(ids[0]);
        state.tick(ids[0], 100.0);

        assert_eq!(
            state.summary(),
            Summary {
                total_files: 2,
                completed: 1,
                total_size: 3072
            }
        );
    }

    #[test]
    fn test_dragging_flag() {
        let mut state = UploadState::<()>::default();
        assert!(!state.is_dragging());
        state.set_dragging(true);
        assert!(state.is_dragging());
        state.set_dragging(false);
        assert!(!state.is_dragging());
    }
}

//! Glue between the Leptos widget and the upload state machine.
//!
//! The whole widget state lives in one `RwSignal<UploadState<File>>`.
//! [`UploadController`] is the only thing that mutates it: it accepts
//! dropped files, spawns one simulation task per accepted entry on the
//! browser event loop and cancels that task when the entry is removed.

use std::time::Duration;

use leptos::*;
use pdfdrop::{
    simulate, EntryId, FileCandidate, LocalBoxFuture, ProgressSink, RandomIncrements,
    SimulationEnd, SimulationError, SimulationTasks, TickOutcome, Timer, UploadState,
    UploaderConfig,
};
use web_sys::File;

/// Browser timer backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}

/// Applies simulation ticks to the widget signal.
///
/// A disposed signal (widget unmounted) reads as a vanished entry, which
/// ends the task.
#[derive(Clone, Copy)]
pub struct SignalSink(pub RwSignal<UploadState<File>>);

impl ProgressSink for SignalSink {
    fn apply_tick(&self, id: EntryId, increment: f64) -> TickOutcome {
        self.0
            .try_update(|state| state.tick(id, increment))
            .unwrap_or(TickOutcome::Ignored)
    }

    fn clear_progress(&self, id: EntryId) {
        let _ = self.0.try_update(|state| state.clear_progress(id));
    }
}

/// Handle on the widget state and its running simulations.
#[derive(Clone, Copy)]
pub struct UploadController {
    state: RwSignal<UploadState<File>>,
    tasks: StoredValue<SimulationTasks>,
}

impl UploadController {
    /// Create the signals. Must run inside a reactive owner (a component).
    pub fn new(config: UploaderConfig) -> Self {
        if let Err(e) = config.validate() {
            log::error!("❌ Invalid uploader configuration, using defaults: {}", e);
            return Self::new(UploaderConfig::default());
        }
        Self {
            state: create_rw_signal(UploadState::new(config)),
            tasks: store_value(SimulationTasks::new()),
        }
    }

    pub fn state(&self) -> RwSignal<UploadState<File>> {
        self.state
    }

    /// Accept a batch from a drop or the picker and start the accepted files.
    pub fn add_files(&self, candidates: Vec<FileCandidate<File>>) {
        if candidates.is_empty() {
            return;
        }
        let outcome = self
            .state
            .try_update(|state| state.accept(candidates))
            .unwrap_or_default();

        log::info!(
            "📤 {} file(s) accepted, {} rejected",
            outcome.accepted.len(),
            outcome.rejected.len()
        );

        for id in outcome.accepted {
            let started = self.state.try_update(|state| state.start_progress(id));
            if started == Some(true) {
                self.spawn_simulation(id);
            }
        }
    }

    fn spawn_simulation(&self, id: EntryId) {
        let state = self.state;
        let tasks = self.tasks;
        let config = state.with_untracked(|s| s.config().clone());

        let run = async move {
            let mut source = RandomIncrements::from_entropy(config.max_increment);
            simulate(id, &config, &GlooTimer, &mut source, &SignalSink(state)).await
        };
        let Some(task) = tasks.try_update_value(|t| t.register(id, run)) else {
            return;
        };

        spawn_local(async move {
            match task.await {
                Ok(end) => {
                    if end == SimulationEnd::Orphaned {
                        log::debug!("Simulation for {} ended without its entry", id);
                    }
                    let _ = tasks.try_update_value(|t| t.finish(id));
                }
                Err(SimulationError::Aborted) => {
                    log::debug!("Simulation for {} aborted", id);
                }
            }
        });
    }

    /// Remove an entry, its progress row and its running task.
    pub fn remove(&self, id: EntryId) {
        let _ = self.tasks.try_update_value(|t| t.cancel(id));
        if let Some(Some(entry)) = self.state.try_update(|state| state.remove(id)) {
            log::info!("🗑️ Removed {}", entry.name);
        }
    }

    pub fn set_dragging(&self, dragging: bool) {
        if self.state.with_untracked(|s| s.is_dragging()) != dragging {
            self.state.update(|state| state.set_dragging(dragging));
        }
    }

    pub fn dismiss_rejection(&self, index: usize) {
        self.state.update(|state| {
            state.dismiss_rejection(index);
        });
    }

    /// Abort every running simulation; used when the widget unmounts.
    pub fn shutdown(&self) {
        let _ = self.tasks.try_update_value(|t| t.cancel_all());
    }
}

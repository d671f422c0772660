//! Simulated upload progress.
//!
//! Each accepted entry gets its own task that sleeps for one tick
//! interval, draws a random increment, applies it to the state and starts
//! over until the entry completes. A completed entry keeps its full bar
//! for the cleanup delay, then the progress row is dropped.
//!
//! Time and randomness are injected:
//!
//! - [`Timer`] - resolves a future after a duration (`gloo-timers` in the
//!   browser, manual timers in tests)
//! - [`ProgressSource`] - produces increments ([`RandomIncrements`] or
//!   [`ScriptedIncrements`])
//! - [`ProgressSink`] - where ticks land (the widget's signal, or a
//!   `RefCell<UploadState>`)
//!
//! Tasks are registered in [`SimulationTasks`] so that removing an entry
//! can abort its timer loop.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::time::Duration;

use futures::future::{abortable, AbortHandle, LocalBoxFuture};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::UploaderConfig;
use crate::error::{SimulationError, SimulationResult};
use crate::models::{EntryId, TickOutcome};
use crate::state::UploadState;

// =============================================================================
// Injected dependencies
// =============================================================================

/// Source of delays.
pub trait Timer {
    /// Future resolving once `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Source of progress increments, in percent.
pub trait ProgressSource {
    fn next_increment(&mut self) -> f64;
}

/// Receiver of simulation steps.
pub trait ProgressSink {
    /// Apply one increment to an entry.
    fn apply_tick(&self, id: EntryId, increment: f64) -> TickOutcome;

    /// Drop the entry's progress row after the cleanup delay.
    fn clear_progress(&self, id: EntryId);
}

impl<H> ProgressSink for RefCell<UploadState<H>> {
    fn apply_tick(&self, id: EntryId, increment: f64) -> TickOutcome {
        self.borrow_mut().tick(id, increment)
    }

    fn clear_progress(&self, id: EntryId) {
        self.borrow_mut().clear_progress(id);
    }
}

/// Uniform increments in `[0, max)`.
#[derive(Debug, Clone)]
pub struct RandomIncrements<R = StdRng> {
    rng: R,
    max: f64,
}

impl RandomIncrements<StdRng> {
    /// Entropy-seeded generator, for the browser.
    pub fn from_entropy(max: f64) -> Self {
        Self::new(StdRng::from_entropy(), max)
    }
}

impl<R: Rng> RandomIncrements<R> {
    pub fn new(rng: R, max: f64) -> Self {
        Self { rng, max }
    }
}

impl<R: Rng> ProgressSource for RandomIncrements<R> {
    fn next_increment(&mut self) -> f64 {
        // gen_range panics on an empty range
        if !(self.max > 0.0) || !self.max.is_finite() {
            return 0.0;
        }
        self.rng.gen_range(0.0..self.max)
    }
}

/// Fixed increment sequence, repeating `fallback` once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIncrements {
    steps: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedIncrements {
    pub fn new(steps: impl IntoIterator<Item = f64>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            fallback: 0.0,
        }
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }
}

impl ProgressSource for ScriptedIncrements {
    fn next_increment(&mut self) -> f64 {
        self.steps.pop_front().unwrap_or(self.fallback)
    }
}

// =============================================================================
// Simulation loop
// =============================================================================

/// How a simulation task ended on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEnd {
    /// Reached 100 % and cleaned up its progress row.
    Completed,
    /// The entry disappeared (or was no longer uploading) mid-way; its
    /// progress row, if any, has been dropped.
    Orphaned,
}

/// Drive one entry from `Uploading` to `Completed`.
///
/// The entry must already be started (see [`UploadState::start_progress`]).
/// The loop stops on the first tick that does not progress, so exactly one
/// timer is live per running task and none outlives it.
pub async fn simulate<T, S, K>(
    id: EntryId,
    config: &UploaderConfig,
    timer: &T,
    source: &mut S,
    sink: &K,
) -> SimulationEnd
where
    T: Timer + ?Sized,
    S: ProgressSource + ?Sized,
    K: ProgressSink + ?Sized,
{
    loop {
        timer.sleep(config.tick_interval()).await;

        match sink.apply_tick(id, source.next_increment()) {
            TickOutcome::Progressed(_) => continue,
            TickOutcome::Completed => break,
            TickOutcome::Ignored => {
                // Completed elsewhere or removed: leave no row behind
                sink.clear_progress(id);
                log::debug!("Simulation for {} stopped, entry is gone", id);
                return SimulationEnd::Orphaned;
            }
        }
    }

    timer.sleep(config.cleanup_delay()).await;
    sink.clear_progress(id);
    log::debug!("Progress row for {} cleaned up", id);
    SimulationEnd::Completed
}

// =============================================================================
// Task registry
// =============================================================================

/// Abort handles of the running simulation tasks, keyed by entry.
#[derive(Debug, Default)]
pub struct SimulationTasks {
    handles: HashMap<EntryId, AbortHandle>,
}

impl SimulationTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `task` so it can be cancelled through [`Self::cancel`].
    ///
    /// The returned future still has to be spawned by the caller. A task
    /// already registered under the same id is aborted first.
    pub fn register<F>(&mut self, id: EntryId, task: F) -> impl Future<Output = SimulationResult<F::Output>>
    where
        F: Future,
    {
        let (task, handle) = abortable(task);
        if let Some(previous) = self.handles.insert(id, handle) {
            previous.abort();
        }
        async move { task.await.map_err(SimulationError::from) }
    }

    /// Abort the task of an entry. Returns `false` if none was running.
    pub fn cancel(&mut self, id: EntryId) -> bool {
        match self.handles.remove(&id) {
            Some(handle) => {
                handle.abort();
                log::debug!("Simulation for {} cancelled", id);
                true
            }
            None => false,
        }
    }

    /// Forget a task that ended by itself.
    pub fn finish(&mut self, id: EntryId) {
        self.handles.remove(&id);
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }

    pub fn is_running(&self, id: EntryId) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

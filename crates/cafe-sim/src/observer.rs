//! Simulation observer trait for progress reporting and invariant checks.

use cafe_core::{Order, Timestamp, WorkerId};

/// Callbacks invoked by [`EventSimulator::run`][crate::EventSimulator::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// An order entered the waiting structure at `clock`.
    fn on_admit(&mut self, _clock: Timestamp, _order: &Order) {}

    /// `order` was handed to `worker` at `clock`.  The order is already
    /// stamped with its start and completion times.
    fn on_assign(&mut self, _clock: Timestamp, _worker: WorkerId, _order: &Order) {}

    /// End of one loop iteration.  `idle_workers` counts workers available at
    /// `clock`; `waiting` is the size of the waiting structure.
    fn on_step(&mut self, _clock: Timestamp, _idle_workers: usize, _waiting: usize) {}

    /// Called once after the last order is processed.
    fn on_run_end(&mut self, _clock: Timestamp, _processed: usize) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

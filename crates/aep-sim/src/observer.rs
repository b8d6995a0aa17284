//! Simulation observer trait for progress reporting and data collection.

use aep_core::{AircraftId, Minute};
use aep_fleet::{Aircraft, Fleet};

use crate::{RunSummary, TickSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { every: i64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, minute: Minute, summary: &TickSummary) {
///         if minute.0 % self.every == 0 {
///             println!("{minute}: {} active, {} landed", summary.active, summary.landed);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _minute: Minute) {}

    /// Called after every aircraft has moved, before landed and diverted
    /// aircraft are retired.
    ///
    /// `active` lists the aircraft that were in the sequence this tick,
    /// closest to the threshold first.
    fn on_snapshot(&mut self, _minute: Minute, _fleet: &Fleet, _active: &[AircraftId]) {}

    /// Called once per aircraft when it leaves the active set, with its
    /// complete history.
    fn on_retired(&mut self, _aircraft: &Aircraft) {}

    /// Called at the end of each tick with the running totals.
    fn on_tick_end(&mut self, _minute: Minute, _summary: &TickSummary) {}

    /// Called once after the horizon closes.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

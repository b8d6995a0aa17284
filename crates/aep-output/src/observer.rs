//! `HistoryObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use aep_core::Minute;
use aep_fleet::Aircraft;
use aep_sim::{RunSummary, SimObserver, TickSummary};

use crate::row::{HistoryRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every retired aircraft's history and every
/// tick summary to an [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct HistoryObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> HistoryObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for HistoryObserver<W> {
    fn on_retired(&mut self, aircraft: &Aircraft) {
        let rows: Vec<HistoryRow> = aircraft
            .history()
            .iter()
            .map(|s| HistoryRow::from_snapshot(aircraft.id(), s))
            .collect();
        let result = self.writer.write_history(&rows);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, _minute: Minute, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

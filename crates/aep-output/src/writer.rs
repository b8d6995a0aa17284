//! The `OutputWriter` trait implemented by backend writers.

use crate::{HistoryRow, OutputResult, TickSummaryRow};

/// Sink for aircraft histories and per-tick totals.
///
/// Errors surface through [`HistoryObserver::take_error`][crate::HistoryObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Write one aircraft's history, oldest snapshot first.
    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

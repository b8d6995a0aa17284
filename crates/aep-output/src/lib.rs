//! `aep-output` — simulation output writers for the AEP arrival sequencer.
//!
//! | Backend | Files created                                        |
//! |---------|------------------------------------------------------|
//! | CSV     | `aircraft_history.csv`, `tick_summaries.csv`         |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`HistoryObserver`], which implements `aep_sim::SimObserver`.  Each
//! aircraft's full history is written once, when it retires.
//!
//! # Usage
//!
//! ```rust,ignore
//! use aep_output::{CsvWriter, HistoryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = HistoryObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::HistoryObserver;
pub use row::{HistoryRow, TickSummaryRow};
pub use writer::OutputWriter;

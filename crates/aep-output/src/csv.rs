//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `aircraft_history.csv`
//! - `tick_summaries.csv`
//!
//! Missing neighbours and gaps are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{HistoryRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    history:   Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut history = Writer::from_path(dir.join("aircraft_history.csv"))?;
        history.write_record([
            "aircraft_id",
            "minute",
            "position_nm",
            "speed_kt",
            "state",
            "gap_ahead_min",
            "lead_id",
            "gap_behind_min",
            "tail_id",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["minute", "active", "landed", "diverted", "congestion_events"])?;

        Ok(Self {
            history,
            summaries,
            finished: false,
        })
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()> {
        for row in rows {
            self.history.write_record(&[
                row.aircraft_id.to_string(),
                row.minute.to_string(),
                row.position_nm.to_string(),
                row.speed_kt.to_string(),
                row.state.as_str().to_owned(),
                opt(row.gap_ahead_min),
                opt(row.lead_id),
                opt(row.gap_behind_min),
                opt(row.tail_id),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.minute.to_string(),
            row.active.to_string(),
            row.landed.to_string(),
            row.diverted.to_string(),
            row.congestion_events.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.history.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}

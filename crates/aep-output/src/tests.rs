//! Integration tests for aep-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use aep_fleet::FlightState;

    use crate::csv::CsvWriter;
    use crate::row::{HistoryRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn history_row(aircraft_id: u32, minute: i64) -> HistoryRow {
        HistoryRow {
            aircraft_id,
            minute,
            position_nm:    42.5,
            speed_kt:       250.0,
            state:          FlightState::Flying,
            gap_ahead_min:  Some(4.5),
            lead_id:        Some(aircraft_id - 1),
            gap_behind_min: None,
            tail_id:        None,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("aircraft_history.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("aircraft_history.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "aircraft_id", "minute", "position_nm", "speed_kt", "state",
                "gap_ahead_min", "lead_id", "gap_behind_min", "tail_id",
            ]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["minute", "active", "landed", "diverted", "congestion_events"]);
    }

    #[test]
    fn history_rows_written_with_blank_neighbours() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_history(&[history_row(2, 7), history_row(2, 8)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("aircraft_history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "2");      // aircraft_id
        assert_eq!(&rows[1][1], "8");      // minute
        assert_eq!(&rows[0][2], "42.5");
        assert_eq!(&rows[0][4], "flying");
        assert_eq!(&rows[0][5], "4.5");
        assert_eq!(&rows[0][6], "1");      // lead_id
        assert_eq!(&rows[0][7], "");
        assert_eq!(&rows[0][8], "");
    }

    #[test]
    fn tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = TickSummaryRow { minute: 3, active: 5, landed: 2, diverted: 1, congestion_events: 4 };
        w.write_tick_summary(&row).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "5", "2", "1", "4"]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use aep_arrivals::ArrivalSchedule;
    use aep_core::{ApproachConfig, Minute};
    use aep_sim::SimBuilder;

    use crate::{CsvWriter, HistoryObserver, HistoryRow, OutputError, OutputResult, OutputWriter, TickSummaryRow};

    fn quiet_sim(minutes: &[i64]) -> aep_sim::Sim {
        let config = ApproachConfig {
            arrival_rate_per_hour: 0.0,
            horizon_hours: 2.0,
            storm_enabled: false,
            wind_enabled: false,
            ..ApproachConfig::default()
        };
        let schedule = ArrivalSchedule::from_minutes(minutes.iter().map(|&m| Minute(m)).collect());
        SimBuilder::new(config).schedule(schedule).build().unwrap()
    }

    /// Counts rows in memory.
    #[derive(Default)]
    struct Collecting {
        history:  Vec<HistoryRow>,
        ticks:    Vec<TickSummaryRow>,
        finished: usize,
    }

    impl OutputWriter for Collecting {
        fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()> {
            self.history.extend_from_slice(rows);
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.ticks.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Fails every write.
    struct Broken;

    impl OutputWriter for Broken {
        fn write_history(&mut self, _rows: &[HistoryRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("first failure")))
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn every_snapshot_and_tick_is_written() {
        let mut sim = quiet_sim(&[0, 1]);
        let mut obs = HistoryObserver::new(Collecting::default());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        let snapshots: usize = sim.fleet.iter().map(|a| a.history().len()).sum();
        assert_eq!(writer.history.len(), snapshots);
        assert_eq!(writer.ticks.len(), 120);
        assert_eq!(writer.finished, 1);

        let last = writer.ticks.last().unwrap();
        assert_eq!(last.minute, 119);
        assert_eq!(last.landed + last.diverted, 2);
    }

    #[test]
    fn history_rows_grouped_by_aircraft() {
        let mut sim = quiet_sim(&[0, 30]);
        let mut obs = HistoryObserver::new(Collecting::default());
        sim.run(&mut obs).unwrap();
        let writer = obs.into_writer();

        // Each aircraft's rows are contiguous and in minute order.
        let mut groups = vec![writer.history[0].aircraft_id];
        for w in writer.history.windows(2) {
            if w[0].aircraft_id == w[1].aircraft_id {
                assert_eq!(w[1].minute, w[0].minute + 1);
            } else {
                groups.push(w[1].aircraft_id);
            }
        }
        groups.sort_unstable();
        assert_eq!(groups, [1, 2]);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = quiet_sim(&[0]);
        let mut obs = HistoryObserver::new(Broken);
        sim.run(&mut obs).unwrap();
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("first failure"), "{err}");
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_export_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = quiet_sim(&[0, 5, 40]);
        let mut obs = HistoryObserver::new(CsvWriter::new(dir.path()).unwrap());
        let summary = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("aircraft_history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        let snapshots: usize = sim.fleet.iter().map(|a| a.history().len()).sum();
        assert_eq!(rows.len(), snapshots);
        let terminal = rows.iter().filter(|r| &r[4] == "landed" || &r[4] == "diverted").count();
        assert_eq!(terminal, summary.arrivals);
    }
}

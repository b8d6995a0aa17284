//! single-day — one operating day of arrivals into a single runway.
//!
//! Runs an 18-hour day at 20 arrivals per hour with storms, wind shear and
//! re-admission enabled, writes the full aircraft histories to
//! `output/single-day/`, and prints the run summary plus the first few
//! aircraft.
//!
//! Pass a JSON file to override any part of the configuration; missing
//! fields keep their defaults:
//!
//! ```text
//! cargo run -p single-day -- day.json
//! RUST_LOG=debug cargo run -p single-day
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use aep_core::{ApproachConfig, Minute};
use aep_fleet::Aircraft;
use aep_output::{CsvWriter, HistoryObserver, OutputWriter};
use aep_sim::{RunSummary, SimBuilder, SimObserver, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/single-day";
/// Local hour at which the airport opens (minute 0).
const OPEN_HOUR:  u32   = 6;
const TABLE_ROWS: usize = 15;

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:        HistoryObserver<W>,
    history_rows: usize,
    summary_rows: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: HistoryObserver<W>) -> Self {
        Self { inner, history_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_retired(&mut self, aircraft: &Aircraft) {
        self.history_rows += aircraft.history().len();
        self.inner.on_retired(aircraft);
    }

    fn on_tick_end(&mut self, minute: Minute, summary: &TickSummary) {
        self.summary_rows += 1;
        self.inner.on_tick_end(minute, summary);
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        self.inner.on_sim_end(summary);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<ApproachConfig> {
    let Some(path) = path else {
        return Ok(ApproachConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {path}"))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing config {path}"))
}

fn clock(minute: Minute) -> String {
    let (h, m) = minute.wall_clock(OPEN_HOUR);
    format!("{h:02}:{m:02}")
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;

    println!("=== single-day — AEP arrival sequencing ===");
    println!(
        "Rate: {}/h  |  Horizon: {} h  |  Seed: {}  |  Wind p: {}",
        config.arrival_rate_per_hour, config.horizon_hours, config.seed, config.wind_probability
    );
    println!();

    // 1. Build sim (validates the config, draws arrivals and the storm).
    let mut sim = SimBuilder::new(config).build()?;
    tracing::info!(arrivals = sim.schedule.len(), "day drawn");
    println!("Scheduled arrivals: {}", sim.schedule.len());
    if let Some(storm) = sim.storm {
        println!("Storm closure: {} to {}", clock(storm.start()), clock(storm.end()));
    }
    println!();

    // 2. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(HistoryObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    let summary = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  aircraft_history.csv : {} rows", obs.history_rows);
    println!("  tick_summaries.csv   : {} rows", obs.summary_rows);
    println!();
    println!("{summary}");
    println!();

    // 5. First aircraft of the day.
    println!("{:<8} {:<8} {:<10} {:<8} {:<8}", "Aircraft", "Contact", "Outcome", "At", "Delay");
    println!("{}", "-".repeat(46));
    for a in sim.fleet.iter().take(TABLE_ROWS) {
        let last = a.history().last().map_or(a.contact_time(), |s| s.minute);
        let delay = aep_sim::summary::landing_delay(a, &sim.config.speed_bands)
            .map_or_else(|| "-".to_owned(), |d| format!("{d} min"));
        println!(
            "{:<8} {:<8} {:<10} {:<8} {:<8}",
            a.id().to_string(),
            clock(a.contact_time()),
            a.state().as_str(),
            clock(last),
            delay,
        );
    }
    if sim.fleet.len() > TABLE_ROWS {
        println!("… {} more", sim.fleet.len() - TABLE_ROWS);
    }

    Ok(())
}

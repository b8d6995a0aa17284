//! Per-tick and per-run aggregates.

use std::fmt;

use aep_core::{Minute, SpeedBands};
use aep_disruption::StormWindow;
use aep_fleet::{Aircraft, time_to_land};

/// Running totals reported to observers at the end of every tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub minute:            Minute,
    /// Aircraft still in the sequence after retirement.
    pub active:            usize,
    pub landed:            u32,
    pub diverted:          u32,
    pub congestion_events: u32,
}

/// Aggregate outcome of one simulated day.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub seed:                u64,
    /// Aircraft that made radar contact during the day.
    pub arrivals:            usize,
    pub landed_count:        u32,
    pub diverted_count:      u32,
    /// 20 kt slow-downs applied by the separation policy.
    pub congestion_events:   u32,
    /// Go-arounds ordered by the separation policy.
    pub go_arounds:          u32,
    pub wind_interruptions:  u32,
    pub storm_interruptions: u32,
    pub readmissions:        u32,
    pub storm_window:        Option<StormWindow>,
    /// Mean landing delay over landed aircraft; `None` if nothing landed.
    pub mean_delay_minutes:  Option<f64>,
}

/// Minutes `aircraft` landed later than it could have, or `None` if it did
/// not land.
///
/// The unimpeded landing minute counts from `contact_time - 1`, where the
/// history places the aircraft at its entry range.
pub fn landing_delay(aircraft: &Aircraft, bands: &SpeedBands) -> Option<i64> {
    let landed_at = aircraft.landed_at()?;
    let unimpeded = time_to_land(aircraft.entry_range_nm(), bands)?;
    let earliest = aircraft.contact_time() - 1 + i64::from(unimpeded);
    Some(landed_at - earliest)
}

/// Mean of [`landing_delay`] over every aircraft that landed.
pub fn mean_delay<'a>(
    aircraft: impl IntoIterator<Item = &'a Aircraft>,
    bands:    &SpeedBands,
) -> Option<f64> {
    let (sum, count) = aircraft
        .into_iter()
        .filter_map(|a| landing_delay(a, bands))
        .fold((0i64, 0u32), |(sum, count), d| (sum + d, count + 1));
    (count > 0).then(|| sum as f64 / f64::from(count))
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "seed                 {}", self.seed)?;
        writeln!(f, "arrivals             {}", self.arrivals)?;
        writeln!(f, "landed               {}", self.landed_count)?;
        writeln!(f, "diverted             {}", self.diverted_count)?;
        writeln!(f, "congestion events    {}", self.congestion_events)?;
        writeln!(f, "go-arounds           {}", self.go_arounds)?;
        writeln!(f, "wind interruptions   {}", self.wind_interruptions)?;
        writeln!(f, "storm interruptions  {}", self.storm_interruptions)?;
        writeln!(f, "re-admissions        {}", self.readmissions)?;
        match self.storm_window {
            Some(w) => writeln!(f, "storm window         {w}")?,
            None    => writeln!(f, "storm window         none")?,
        }
        match self.mean_delay_minutes {
            Some(d) => write!(f, "mean delay           {d:.2} min"),
            None    => write!(f, "mean delay           n/a"),
        }
    }
}

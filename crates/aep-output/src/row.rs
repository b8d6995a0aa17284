//! Plain data row types written by output backends.

use aep_core::AircraftId;
use aep_fleet::{FlightState, Snapshot};
use aep_sim::TickSummary;

/// One aircraft at one minute.
///
/// `None` gaps and neighbours mean there is no aircraft on that side;
/// an infinite gap means the relevant speed was zero or negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRow {
    pub aircraft_id:    u32,
    pub minute:         i64,
    pub position_nm:    f64,
    pub speed_kt:       f64,
    pub state:          FlightState,
    pub gap_ahead_min:  Option<f64>,
    pub lead_id:        Option<u32>,
    pub gap_behind_min: Option<f64>,
    pub tail_id:        Option<u32>,
}

impl HistoryRow {
    pub fn from_snapshot(aircraft: AircraftId, s: &Snapshot) -> Self {
        Self {
            aircraft_id:    aircraft.0,
            minute:         s.minute.0,
            position_nm:    s.position_nm,
            speed_kt:       s.speed_kt,
            state:          s.state,
            gap_ahead_min:  s.gap_ahead,
            lead_id:        s.lead.map(|id| id.0),
            gap_behind_min: s.gap_behind,
            tail_id:        s.tail.map(|id| id.0),
        }
    }
}

/// Running totals at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub minute:            i64,
    pub active:            u64,
    pub landed:            u32,
    pub diverted:          u32,
    pub congestion_events: u32,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            minute:            s.minute.0,
            active:            s.active as u64,
            landed:            s.landed,
            diverted:          s.diverted,
            congestion_events: s.congestion_events,
        }
    }
}

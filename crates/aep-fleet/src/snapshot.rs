//! Per-minute history entries.

use aep_core::{AircraftId, Minute};

use crate::FlightState;

/// The recorded state of one aircraft at the end of one tick.
///
/// Gaps are in minutes; `f64::INFINITY` means "no separation pressure"
/// (the relevant speed was zero or negative), `None` means there is no
/// neighbour on that side.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub minute:      Minute,
    pub position_nm: f64,
    pub speed_kt:    f64,
    pub state:       FlightState,
    pub gap_ahead:   Option<f64>,
    pub lead:        Option<AircraftId>,
    pub gap_behind:  Option<f64>,
    pub tail:        Option<AircraftId>,
}

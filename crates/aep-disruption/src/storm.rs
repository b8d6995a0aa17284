//! The storm closure window.

use std::ops::Range;

use aep_core::{AepError, AepResult, AircraftId, Minute, STORM_WINDOW_MINUTES, SimRng};
use aep_fleet::{Fleet, FlightState, minutes_to_threshold};

/// A fixed `[start, start + 30)` interval during which the runway is closed.
///
/// Drawn once per run and immutable afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StormWindow {
    start: Minute,
}

impl StormWindow {
    /// A window starting at `start`.
    pub fn starting_at(start: Minute) -> Self {
        Self { start }
    }

    /// Place a window uniformly inside `[0, horizon_minutes)`.
    ///
    /// Fails if the horizon cannot hold a whole window.
    pub fn draw(horizon_minutes: i64, rng: &mut SimRng) -> AepResult<Self> {
        if horizon_minutes < STORM_WINDOW_MINUTES {
            return Err(AepError::HorizonTooShort {
                horizon_minutes,
                window_minutes: STORM_WINDOW_MINUTES,
            });
        }
        let start = rng.gen_range(0..=horizon_minutes - STORM_WINDOW_MINUTES);
        Ok(Self { start: Minute(start) })
    }

    #[inline]
    pub fn start(&self) -> Minute {
        self.start
    }

    /// First minute after the closure (exclusive bound).
    #[inline]
    pub fn end(&self) -> Minute {
        self.start + STORM_WINDOW_MINUTES
    }

    #[inline]
    pub fn minutes(&self) -> Range<i64> {
        self.start.0..self.end().0
    }

    #[inline]
    pub fn contains(&self, minute: Minute) -> bool {
        self.start <= minute && minute < self.end()
    }

    /// Send every flying aircraft among `ids` that would reach the
    /// threshold within `short_final_minutes` around at `reverse_speed_kt`.
    ///
    /// The caller decides when the runway is closed; this only applies the
    /// closure.  Returns the turned-away ids.
    pub fn close_runway(
        &self,
        ids:                 &[AircraftId],
        fleet:               &mut Fleet,
        short_final_minutes: f64,
        reverse_speed_kt:    f64,
    ) -> AepResult<Vec<AircraftId>> {
        let mut turned = Vec::new();
        for &id in ids {
            let aircraft = fleet.require_mut(id)?;
            if aircraft.state() == FlightState::Flying
                && minutes_to_threshold(aircraft.position_nm(), aircraft.speed_kt()) <= short_final_minutes
            {
                aircraft.go_around(reverse_speed_kt);
                turned.push(id);
            }
        }
        Ok(turned)
    }
}

impl std::fmt::Display for StormWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start.0, self.end().0)
    }
}

//! Short-final wind interruptions.

use aep_core::{AepResult, AircraftId, SimRng};
use aep_fleet::{Fleet, FlightState, minutes_to_threshold};

/// Gusts that may force an aircraft about to land into a go-around.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindShear {
    probability: f64,
}

impl WindShear {
    /// `probability` is clamped to `[0, 1]`.
    pub fn new(probability: f64) -> Self {
        Self { probability: probability.clamp(0.0, 1.0) }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// For every flying aircraft among `ids` that would reach the threshold
    /// within `short_final_minutes` at its current speed, draw once from
    /// `rng`; below the probability it reverses at `reverse_speed_kt`.
    ///
    /// Aircraft with a zero or negative speed are never on short final and
    /// consume no draw.  Returns the interrupted ids.
    pub fn apply(
        &self,
        ids:                 &[AircraftId],
        fleet:               &mut Fleet,
        short_final_minutes: f64,
        reverse_speed_kt:    f64,
        rng:                 &mut SimRng,
    ) -> AepResult<Vec<AircraftId>> {
        let mut interrupted = Vec::new();
        for &id in ids {
            let aircraft = fleet.require_mut(id)?;
            if aircraft.state() != FlightState::Flying {
                continue;
            }
            let eta = minutes_to_threshold(aircraft.position_nm(), aircraft.speed_kt());
            if eta > short_final_minutes {
                continue;
            }
            let draw: f64 = rng.random();
            if draw < self.probability {
                aircraft.go_around(reverse_speed_kt);
                interrupted.push(id);
            }
        }
        Ok(interrupted)
    }
}

//! The per-aircraft speed-control policy.

use aep_core::{SeparationRules, SpeedBand};

/// What the policy wants one flying aircraft to do this tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpeedDecision {
    /// Stay inbound at `speed_kt`.  `congested` is set when the aircraft had
    /// to slow down because it was inside the minimum gap.
    Fly { speed_kt: f64, congested: bool },
    /// Slowing down would drop below the band minimum: reverse instead.
    GoAround,
}

/// Decide the next speed for a flying aircraft.
///
/// `gap_ahead` is `None` for the aircraft closest to the threshold.  The
/// minimum-gap test is strict (`<`), the buffer test inclusive (`>=`).
pub fn decide(
    speed_kt:  f64,
    gap_ahead: Option<f64>,
    band:      SpeedBand,
    rules:     &SeparationRules,
) -> SpeedDecision {
    // Never faster than the band allows, whatever else happens.
    let speed = speed_kt.min(band.max_kt);

    let Some(gap) = gap_ahead else {
        return SpeedDecision::Fly { speed_kt: band.max_kt, congested: false };
    };

    if gap < rules.min_gap_minutes {
        let reduced = speed - rules.deceleration_step_kt;
        if reduced < band.min_kt {
            SpeedDecision::GoAround
        } else {
            SpeedDecision::Fly { speed_kt: reduced, congested: true }
        }
    } else if gap >= rules.buffer_gap_minutes {
        SpeedDecision::Fly { speed_kt: band.max_kt, congested: false }
    } else {
        SpeedDecision::Fly { speed_kt: speed, congested: false }
    }
}

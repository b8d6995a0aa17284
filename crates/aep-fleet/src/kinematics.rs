//! One-dimensional approach kinematics.

use aep_core::SpeedBands;

/// Iteration cap for [`time_to_land`].  Past it the estimate is "infinite".
pub const MAX_LANDING_ITERATIONS: u32 = 100_000;

/// Result of advancing one aircraft by one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Still flying or reversing.
    Moving,
    /// Reached the threshold this tick.
    Landed,
    /// Reversed past its entry range this tick.
    Diverted,
    /// Already terminal; only a frozen snapshot was recorded.
    Frozen,
}

/// Minutes to land from `position_nm` flying at band max the whole way,
/// stepping one minute at a time.
///
/// Returns `None` ("infinite") if a band max is not positive or the estimate
/// does not converge within [`MAX_LANDING_ITERATIONS`] steps.
pub fn time_to_land(position_nm: f64, bands: &SpeedBands) -> Option<u32> {
    let mut remaining = position_nm;
    let mut minutes = 0u32;
    while remaining > 0.0 {
        if minutes >= MAX_LANDING_ITERATIONS {
            return None;
        }
        let step_nm = bands.max_at(remaining) / 60.0;
        if !(step_nm > 0.0) {
            return None;
        }
        remaining -= step_nm;
        minutes += 1;
    }
    Some(minutes)
}

/// Estimated minutes to reach the threshold at the current speed.
///
/// A zero or negative speed never reaches it: `f64::INFINITY`.
#[inline]
pub fn minutes_to_threshold(position_nm: f64, speed_kt: f64) -> f64 {
    if speed_kt > 0.0 {
        position_nm / speed_kt * 60.0
    } else {
        f64::INFINITY
    }
}

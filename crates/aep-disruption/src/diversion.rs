//! Closing-time feasibility.
//!
//! An aircraft that could not reach the threshold before the airport closes,
//! even flying at band max the whole way, is diverted immediately instead of
//! being stepped until the horizon.

use aep_core::{AepResult, AircraftId, Minute, SpeedBands};
use aep_fleet::{Aircraft, Fleet, time_to_land};

/// `true` if `aircraft` cannot land by `closing` when starting at `now`.
///
/// A non-converging time-to-land estimate counts as "cannot land".
pub fn cannot_land_in_time(aircraft: &Aircraft, now: Minute, closing: Minute, bands: &SpeedBands) -> bool {
    match time_to_land(aircraft.position_nm(), bands) {
        None => true,
        Some(minutes) => now + i64::from(minutes) > closing,
    }
}

/// Divert every non-terminal aircraft among `ids` that cannot land in time.
/// Returns the diverted ids.
pub fn divert_unreachable(
    ids:     &[AircraftId],
    fleet:   &mut Fleet,
    now:     Minute,
    closing: Minute,
    bands:   &SpeedBands,
) -> AepResult<Vec<AircraftId>> {
    let mut diverted = Vec::new();
    for &id in ids {
        let aircraft = fleet.require_mut(id)?;
        if aircraft.state().is_terminal() {
            continue;
        }
        if cannot_land_in_time(aircraft, now, closing, bands) {
            aircraft.divert();
            diverted.push(id);
        }
    }
    Ok(diverted)
}

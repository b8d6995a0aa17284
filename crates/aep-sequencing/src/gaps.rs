//! Temporal gap arithmetic.
//!
//! Gaps are recomputed from scratch every tick from positions and speeds
//! alone, so the same snapshot always yields the same gaps.

use aep_core::AircraftId;

/// Minutes for `distance_nm` to close at `speed_kt`.
///
/// A zero or negative closing speed never closes the gap: `f64::INFINITY`.
#[inline]
pub fn gap_minutes(distance_nm: f64, speed_kt: f64) -> f64 {
    if speed_kt > 0.0 {
        distance_nm / speed_kt * 60.0
    } else {
        f64::INFINITY
    }
}

/// Neighbour gaps for one aircraft in the ordered sequence.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Gaps {
    /// Leader id and gap, measured at the leader's speed.
    pub ahead:  Option<(AircraftId, f64)>,
    /// Follower id and gap, measured at this aircraft's own speed.
    pub behind: Option<(AircraftId, f64)>,
}

/// Gaps for a sequence already ordered by `(position, id)`.
///
/// Each entry is `(id, position_nm, speed_kt)`.  Both directions of a pair
/// close at the leader's speed, so `ahead` of element `i` equals `behind` of
/// element `i - 1`.
pub fn compute_gaps(ordered: &[(AircraftId, f64, f64)]) -> Vec<Gaps> {
    (0..ordered.len())
        .map(|i| {
            let (_, pos, speed) = ordered[i];
            let ahead = i.checked_sub(1).map(|j| {
                let (lead, lead_pos, lead_speed) = ordered[j];
                (lead, gap_minutes(pos - lead_pos, lead_speed))
            });
            let behind = ordered.get(i + 1).map(|&(tail, tail_pos, _)| {
                (tail, gap_minutes(tail_pos - pos, speed))
            });
            Gaps { ahead, behind }
        })
        .collect()
}

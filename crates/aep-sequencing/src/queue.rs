//! The sequencing queue.

use aep_core::{AepResult, AircraftId, SeparationRules, SpeedBands};
use aep_fleet::{Fleet, FlightState};

use crate::{SpeedDecision, compute_gaps, decide};

/// Outcome of one speed-control pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlReport {
    /// Aircraft still inbound after the pass, in sequence order.
    pub flying: Vec<AircraftId>,
    /// Aircraft reversing after the pass (already reversing, or sent around now).
    pub reversing: Vec<AircraftId>,
    /// Aircraft the policy sent around during this pass.
    pub go_arounds: Vec<AircraftId>,
    /// Number of 20 kt congestion slow-downs applied.
    pub congestion_events: u32,
}

/// Active aircraft ordered by distance to the threshold.
///
/// The queue stores ids only; aircraft records live in the [`Fleet`].  The
/// order is rebuilt from current positions on every
/// [`update_gaps`](Self::update_gaps), so it never depends on history.
#[derive(Clone, Debug, Default)]
pub struct SequencingQueue {
    order: Vec<AircraftId>,
}

impl SequencingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an aircraft.  Inserting an id already present is a no-op.
    pub fn insert(&mut self, id: AircraftId) {
        if !self.order.contains(&id) {
            self.order.push(id);
        }
    }

    /// Remove an aircraft, returning whether it was present.
    pub fn remove(&mut self, id: AircraftId) -> bool {
        let before = self.order.len();
        self.order.retain(|&other| other != id);
        self.order.len() != before
    }

    /// Keep only the aircraft for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&AircraftId) -> bool) {
        self.order.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in the order of the last sort (closest to the threshold first).
    pub fn ids(&self) -> &[AircraftId] {
        &self.order
    }

    /// The aircraft closest to the threshold as of the last sort.
    pub fn first(&self) -> Option<AircraftId> {
        self.order.first().copied()
    }

    /// Sort, then recompute and store every aircraft's lead/tail gaps.
    pub fn update_gaps(&mut self, fleet: &mut Fleet) -> AepResult<()> {
        let keyed = self.keyed(fleet)?;
        let gaps = compute_gaps(&keyed);
        for (&(id, _, _), g) in keyed.iter().zip(&gaps) {
            fleet.require_mut(id)?.set_neighbours(g.ahead, g.behind);
        }
        self.order = keyed.into_iter().map(|(id, _, _)| id).collect();
        Ok(())
    }

    /// Run the separation policy over every flying aircraft, in sequence
    /// order, using the gaps stored by the last [`update_gaps`](Self::update_gaps).
    ///
    /// Reversing aircraft are left untouched and only reported.
    pub fn apply_speed_control(
        &self,
        fleet: &mut Fleet,
        rules: &SeparationRules,
        bands: &SpeedBands,
    ) -> AepResult<ControlReport> {
        let mut report = ControlReport::default();

        for &id in &self.order {
            let aircraft = fleet.require_mut(id)?;
            match aircraft.state() {
                FlightState::Reversing => report.reversing.push(id),
                FlightState::Landed | FlightState::Diverted => {}
                FlightState::Flying => {
                    let band = aircraft.band(bands);
                    match decide(aircraft.speed_kt(), aircraft.gap_ahead(), band, rules) {
                        SpeedDecision::Fly { speed_kt, congested } => {
                            aircraft.set_speed(speed_kt);
                            if congested {
                                report.congestion_events += 1;
                            }
                            report.flying.push(id);
                        }
                        SpeedDecision::GoAround => {
                            aircraft.go_around(rules.reverse_speed_kt);
                            report.go_arounds.push(id);
                            report.reversing.push(id);
                        }
                    }
                }
            }
        }
        Ok(report)
    }

    /// `(id, position, speed)` sorted by `(position, id)`.
    fn keyed(&self, fleet: &Fleet) -> AepResult<Vec<(AircraftId, f64, f64)>> {
        let mut keyed = self
            .order
            .iter()
            .map(|&id| {
                let a = fleet.require(id)?;
                Ok((id, a.position_nm(), a.speed_kt()))
            })
            .collect::<AepResult<Vec<_>>>()?;
        keyed.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        Ok(keyed)
    }
}

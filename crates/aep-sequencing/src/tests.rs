//! Unit tests for aep-sequencing.

use aep_core::{AircraftId, Minute, SeparationRules, SpeedBand, SpeedBands};
use aep_fleet::{Aircraft, Fleet, FlightState};

use crate::SequencingQueue;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Fleet with aircraft 1..=n at the given `(position, speed)` pairs, all queued.
fn scenario(placements: &[(f64, f64)]) -> (Fleet, SequencingQueue) {
    let mut fleet = Fleet::new();
    let mut queue = SequencingQueue::new();
    for (i, &(pos, speed)) in placements.iter().enumerate() {
        let id = AircraftId::from_slot(i);
        fleet
            .insert(Aircraft::spawn_at(id, Minute(0), 100.0, pos, speed))
            .unwrap();
        queue.insert(id);
    }
    (fleet, queue)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn control(fleet: &mut Fleet, queue: &mut SequencingQueue) -> crate::ControlReport {
    queue.update_gaps(fleet).unwrap();
    queue
        .apply_speed_control(fleet, &SeparationRules::default(), &SpeedBands::default())
        .unwrap()
}

// ── Gap arithmetic ────────────────────────────────────────────────────────────

#[cfg(test)]
mod gaps {
    use super::*;
    use crate::{compute_gaps, gap_minutes};

    #[test]
    fn gap_uses_closing_speed() {
        assert_eq!(gap_minutes(5.0, 300.0), 1.0);
        assert!(gap_minutes(5.0, 0.0).is_infinite());
        assert!(gap_minutes(5.0, -200.0).is_infinite());
    }

    #[test]
    fn ends_of_sequence_have_no_neighbour() {
        let g = compute_gaps(&[(AircraftId(1), 10.0, 200.0)]);
        assert_eq!(g[0].ahead, None);
        assert_eq!(g[0].behind, None);
        assert!(compute_gaps(&[]).is_empty());
    }

    #[test]
    fn gaps_close_at_the_nearer_aircrafts_speed() {
        let g = compute_gaps(&[
            (AircraftId(1), 10.0, 120.0),
            (AircraftId(2), 20.0, 150.0),
            (AircraftId(3), 30.0, 200.0),
        ]);
        // Ahead closes at the leader's speed, behind at the aircraft's own.
        let (lead, ahead) = g[1].ahead.unwrap();
        let (tail, behind) = g[1].behind.unwrap();
        assert_eq!((lead, tail), (AircraftId(1), AircraftId(3)));
        assert!(approx(ahead, 5.0));
        assert!(approx(behind, 4.0));

        // One pair seen from both ends closes at the same (leading) speed.
        assert_eq!(g[2].ahead.unwrap().1, g[1].behind.unwrap().1);
        assert_eq!(g[1].ahead.unwrap().1, g[0].behind.unwrap().1);
    }
}

// ── Queue ordering and gap assignment ─────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn sorts_by_position_then_id() {
        let (mut fleet, mut queue) = scenario(&[(30.0, 250.0), (10.0, 200.0), (30.0, 250.0)]);
        queue.update_gaps(&mut fleet).unwrap();
        assert_eq!(queue.ids(), [AircraftId(2), AircraftId(1), AircraftId(3)]);

        let tied = fleet.get(AircraftId(3)).unwrap();
        assert_eq!(tied.lead(), Some(AircraftId(1)));
        assert_eq!(tied.gap_ahead(), Some(0.0));
        assert_eq!(fleet.get(AircraftId(2)).unwrap().lead(), None);
        assert_eq!(fleet.get(AircraftId(3)).unwrap().tail(), None);
        assert_eq!(queue.first(), Some(AircraftId(2)));
    }

    #[test]
    fn recomputing_is_idempotent() {
        let (mut fleet, mut queue) = scenario(&[(40.0, 250.0), (12.0, 180.0), (75.0, 300.0)]);
        queue.update_gaps(&mut fleet).unwrap();
        let first: Vec<_> = fleet.iter().map(|a| (a.lead(), a.gap_ahead(), a.tail(), a.gap_behind())).collect();
        queue.update_gaps(&mut fleet).unwrap();
        let second: Vec<_> = fleet.iter().map(|a| (a.lead(), a.gap_ahead(), a.tail(), a.gap_behind())).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn gaps_reproducible_from_positions_and_speeds() {
        let (mut fleet, mut queue) = scenario(&[(40.0, 250.0), (12.0, 180.0), (75.0, 300.0)]);
        queue.update_gaps(&mut fleet).unwrap();
        let ids = queue.ids().to_vec();
        for pair in ids.windows(2) {
            let lead = fleet.get(pair[0]).unwrap();
            let follower = fleet.get(pair[1]).unwrap();
            let expected = (follower.position_nm() - lead.position_nm()) / lead.speed_kt() * 60.0;
            assert_eq!(follower.gap_ahead(), Some(expected));
            assert_eq!(follower.lead(), Some(lead.id()));
        }
    }

    #[test]
    fn insert_and_remove() {
        let mut queue = SequencingQueue::new();
        queue.insert(AircraftId(1));
        queue.insert(AircraftId(1));
        assert_eq!(queue.len(), 1);
        assert!(queue.remove(AircraftId(1)));
        assert!(!queue.remove(AircraftId(1)));
        assert!(queue.is_empty());
    }

    #[test]
    fn unknown_aircraft_is_an_error() {
        let mut fleet = Fleet::new();
        let mut queue = SequencingQueue::new();
        queue.insert(AircraftId(5));
        assert!(queue.update_gaps(&mut fleet).is_err());
    }
}

// ── Speed-control policy ──────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use super::*;
    use crate::{SpeedDecision, decide};

    const TERMINAL_BAND: SpeedBand = SpeedBand::new(150.0, 200.0);

    #[test]
    fn hard_minimum_is_strict() {
        let rules = SeparationRules::default();
        assert_eq!(
            decide(190.0, Some(4.0), TERMINAL_BAND, &rules),
            SpeedDecision::Fly { speed_kt: 190.0, congested: false }
        );
        assert_eq!(
            decide(190.0, Some(3.999), TERMINAL_BAND, &rules),
            SpeedDecision::Fly { speed_kt: 170.0, congested: true }
        );
    }

    #[test]
    fn buffer_is_inclusive() {
        let rules = SeparationRules::default();
        assert_eq!(
            decide(190.0, Some(5.0), TERMINAL_BAND, &rules),
            SpeedDecision::Fly { speed_kt: 200.0, congested: false }
        );
        assert_eq!(
            decide(190.0, Some(4.999), TERMINAL_BAND, &rules),
            SpeedDecision::Fly { speed_kt: 190.0, congested: false }
        );
    }

    #[test]
    fn over_speed_is_clamped_before_deciding() {
        let rules = SeparationRules::default();
        assert_eq!(
            decide(260.0, Some(4.5), TERMINAL_BAND, &rules),
            SpeedDecision::Fly { speed_kt: 200.0, congested: false }
        );
        // Clamped to 200 first, then slowed to 180.
        assert_eq!(
            decide(260.0, Some(1.0), TERMINAL_BAND, &rules),
            SpeedDecision::Fly { speed_kt: 180.0, congested: true }
        );
    }

    #[test]
    fn infinite_gap_accelerates() {
        let rules = SeparationRules::default();
        assert_eq!(
            decide(160.0, Some(f64::INFINITY), TERMINAL_BAND, &rules),
            SpeedDecision::Fly { speed_kt: 200.0, congested: false }
        );
    }

    #[test]
    fn leader_accelerates_to_outer_band_max() {
        let (mut fleet, mut queue) = scenario(&[(120.0, 200.0)]);
        let report = control(&mut fleet, &mut queue);
        let a = fleet.get(AircraftId(1)).unwrap();
        assert_eq!(a.speed_kt(), 500.0);
        assert_eq!(a.state(), FlightState::Flying);
        assert_eq!(report.flying, [AircraftId(1)]);
        assert_eq!(report.congestion_events, 0);
    }

    #[test]
    fn squeezed_slow_follower_goes_around() {
        // Leader at 6 nm doing 150 kt; follower 7.5 nm behind → 3.0 min gap.
        let (mut fleet, mut queue) = scenario(&[(6.0, 150.0), (13.5, 160.0)]);
        let report = control(&mut fleet, &mut queue);
        let follower = fleet.get(AircraftId(2)).unwrap();
        assert!(approx(follower.gap_ahead().unwrap(), 3.0));
        assert_eq!(follower.speed_kt(), -200.0);
        assert_eq!(follower.state(), FlightState::Reversing);
        assert_eq!(report.go_arounds, [AircraftId(2)]);
        assert_eq!(report.reversing, [AircraftId(2)]);
        assert_eq!(report.congestion_events, 0);
    }

    #[test]
    fn squeezed_fast_follower_slows_and_counts_congestion() {
        let (mut fleet, mut queue) = scenario(&[(30.0, 240.0), (40.0, 250.0)]);
        let report = control(&mut fleet, &mut queue);
        // 10 nm at 240 kt = 2.5 min < 4.
        assert_eq!(fleet.get(AircraftId(2)).unwrap().speed_kt(), 230.0);
        assert_eq!(report.congestion_events, 1);
        assert_eq!(report.flying, [AircraftId(1), AircraftId(2)]);
    }

    #[test]
    fn reversing_aircraft_are_left_alone() {
        let (mut fleet, mut queue) = scenario(&[(30.0, 240.0), (31.0, 250.0)]);
        fleet.get_mut(AircraftId(2)).unwrap().go_around(200.0);
        let report = control(&mut fleet, &mut queue);
        assert_eq!(fleet.get(AircraftId(2)).unwrap().speed_kt(), -200.0);
        assert_eq!(report.reversing, [AircraftId(2)]);
        assert!(report.go_arounds.is_empty());
    }

    #[test]
    fn follower_of_reversing_leader_sees_no_pressure() {
        let (mut fleet, mut queue) = scenario(&[(30.0, 240.0), (31.0, 220.0)]);
        fleet.get_mut(AircraftId(1)).unwrap().go_around(200.0);
        control(&mut fleet, &mut queue);
        let follower = fleet.get(AircraftId(2)).unwrap();
        assert!(follower.gap_ahead().unwrap().is_infinite());
        assert_eq!(follower.speed_kt(), 250.0);
    }
}

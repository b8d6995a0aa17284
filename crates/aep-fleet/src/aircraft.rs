//! The aircraft entity.

use aep_core::{AircraftId, Minute, SpeedBand, SpeedBands};

use crate::{FlightState, Snapshot, StepOutcome};

/// One arriving aircraft.
///
/// Identity, contact time and entry range are fixed at creation.  Position,
/// speed and state change only through the methods below, and `history` is
/// append-only: consumers get a read-only slice via [`history`](Self::history).
///
/// Neighbour links (`lead`, `tail`) are plain ids resolved through the
/// [`Fleet`][crate::Fleet] arena; they are overwritten every tick by the
/// sequencing queue.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aircraft {
    id:             AircraftId,
    contact_time:   Minute,
    entry_range_nm: f64,

    position_nm: f64,
    speed_kt:    f64,
    state:       FlightState,

    lead:       Option<AircraftId>,
    gap_ahead:  Option<f64>,
    tail:       Option<AircraftId>,
    gap_behind: Option<f64>,

    landed_at: Option<Minute>,
    history:   Vec<Snapshot>,
}

impl Aircraft {
    /// A new aircraft appearing on radar at `entry_range_nm`, flying at the
    /// band max for that range.
    ///
    /// The history is seeded with the pre-entry state at `contact_time - 1`.
    pub fn new(id: AircraftId, contact_time: Minute, entry_range_nm: f64, bands: &SpeedBands) -> Self {
        let speed = bands.max_at(entry_range_nm);
        Self::spawn_at(id, contact_time, entry_range_nm, entry_range_nm, speed)
    }

    /// An aircraft already part-way along its approach, used to set up
    /// scenarios.  `position_nm` is clamped to be non-negative.
    pub fn spawn_at(
        id:             AircraftId,
        contact_time:   Minute,
        entry_range_nm: f64,
        position_nm:    f64,
        speed_kt:       f64,
    ) -> Self {
        let mut aircraft = Self {
            id,
            contact_time,
            entry_range_nm,
            position_nm: position_nm.max(0.0),
            speed_kt,
            state: FlightState::Flying,
            lead: None,
            gap_ahead: None,
            tail: None,
            gap_behind: None,
            landed_at: None,
            history: Vec::new(),
        };
        aircraft.record(contact_time - 1);
        aircraft
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AircraftId {
        self.id
    }

    #[inline]
    pub fn contact_time(&self) -> Minute {
        self.contact_time
    }

    #[inline]
    pub fn entry_range_nm(&self) -> f64 {
        self.entry_range_nm
    }

    #[inline]
    pub fn position_nm(&self) -> f64 {
        self.position_nm
    }

    /// Signed speed: positive inbound, negative while reversing, 0 once terminal.
    #[inline]
    pub fn speed_kt(&self) -> f64 {
        self.speed_kt
    }

    #[inline]
    pub fn state(&self) -> FlightState {
        self.state
    }

    #[inline]
    pub fn lead(&self) -> Option<AircraftId> {
        self.lead
    }

    #[inline]
    pub fn gap_ahead(&self) -> Option<f64> {
        self.gap_ahead
    }

    #[inline]
    pub fn tail(&self) -> Option<AircraftId> {
        self.tail
    }

    #[inline]
    pub fn gap_behind(&self) -> Option<f64> {
        self.gap_behind
    }

    /// Minute at which the aircraft reached the threshold.
    #[inline]
    pub fn landed_at(&self) -> Option<Minute> {
        self.landed_at
    }

    /// The full per-minute history, oldest first.
    #[inline]
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Allowed speed band at the current position.
    #[inline]
    pub fn band(&self, bands: &SpeedBands) -> SpeedBand {
        bands.band_at(self.position_nm)
    }

    // ── Control inputs ────────────────────────────────────────────────────

    /// Assign a new inbound speed.  Ignored once terminal.
    pub fn set_speed(&mut self, speed_kt: f64) {
        if !self.state.is_terminal() {
            self.speed_kt = speed_kt;
        }
    }

    /// Overwrite the neighbour links computed by the sequencing queue.
    pub fn set_neighbours(
        &mut self,
        ahead:  Option<(AircraftId, f64)>,
        behind: Option<(AircraftId, f64)>,
    ) {
        self.lead = ahead.map(|(id, _)| id);
        self.gap_ahead = ahead.map(|(_, gap)| gap);
        self.tail = behind.map(|(id, _)| id);
        self.gap_behind = behind.map(|(_, gap)| gap);
    }

    /// Start flying away from the threshold at `reverse_speed_kt`.
    pub fn go_around(&mut self, reverse_speed_kt: f64) {
        if !self.state.is_terminal() {
            self.state = FlightState::Reversing;
            self.speed_kt = -reverse_speed_kt.abs();
        }
    }

    /// Rejoin the inbound flow at `speed_kt`.  Only valid while reversing.
    pub fn resume(&mut self, speed_kt: f64) {
        if self.state == FlightState::Reversing {
            self.state = FlightState::Flying;
            self.speed_kt = speed_kt;
        }
    }

    /// Remove from the sequence for good.  Position is frozen where it is.
    pub fn divert(&mut self) {
        if !self.state.is_terminal() {
            self.state = FlightState::Diverted;
            self.speed_kt = 0.0;
        }
    }

    // ── Kinematics ────────────────────────────────────────────────────────

    /// Advance `dt` minutes and append the snapshot for `minute`.
    pub fn advance(&mut self, minute: Minute, dt: f64, reverse_speed_kt: f64) -> StepOutcome {
        let outcome = match self.state {
            FlightState::Landed | FlightState::Diverted => StepOutcome::Frozen,

            FlightState::Flying => {
                let closed = self.speed_kt.max(0.0) / 60.0 * dt;
                self.position_nm = (self.position_nm - closed).max(0.0);
                if self.position_nm <= 0.0 {
                    self.position_nm = 0.0;
                    self.state = FlightState::Landed;
                    self.speed_kt = 0.0;
                    self.landed_at = Some(minute);
                    StepOutcome::Landed
                } else {
                    StepOutcome::Moving
                }
            }

            FlightState::Reversing => {
                let rate = reverse_speed_kt.abs();
                self.speed_kt = -rate;
                self.position_nm += rate / 60.0 * dt;
                if self.position_nm > self.entry_range_nm {
                    self.state = FlightState::Diverted;
                    self.speed_kt = 0.0;
                    StepOutcome::Diverted
                } else {
                    StepOutcome::Moving
                }
            }
        };
        self.record(minute);
        outcome
    }

    /// Append a snapshot of the current state.  Terminal aircraft report 0 kt.
    pub fn record(&mut self, minute: Minute) {
        let speed_kt = if self.state.is_terminal() { 0.0 } else { self.speed_kt };
        self.history.push(Snapshot {
            minute,
            position_nm: self.position_nm,
            speed_kt,
            state: self.state,
            gap_ahead: self.gap_ahead,
            lead: self.lead,
            gap_behind: self.gap_behind,
            tail: self.tail,
        });
    }
}

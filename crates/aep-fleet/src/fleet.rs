//! Id-indexed arena owning every aircraft of a run.

use aep_core::{AepError, AepResult, AircraftId, Minute, SpeedBands};

use crate::{Aircraft, FlightState};

/// Owns every aircraft created during a run, active or retired.
///
/// `AircraftId(n)` lives at index `n - 1`, so lookups are O(1) and ids are
/// never reused.  Other components refer to aircraft only by id.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    aircraft: Vec<Aircraft>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { aircraft: Vec::with_capacity(capacity) }
    }

    /// Create the next aircraft at its entry range and return its id.
    pub fn spawn(&mut self, contact_time: Minute, entry_range_nm: f64, bands: &SpeedBands) -> AircraftId {
        let id = AircraftId::from_slot(self.aircraft.len());
        self.aircraft.push(Aircraft::new(id, contact_time, entry_range_nm, bands));
        id
    }

    /// Add a pre-built aircraft.  Its id must be the next free one.
    pub fn insert(&mut self, aircraft: Aircraft) -> AepResult<AircraftId> {
        let expected = AircraftId::from_slot(self.aircraft.len());
        if aircraft.id() != expected {
            return Err(AepError::Config(format!(
                "fleet expected {expected} next, got {}",
                aircraft.id()
            )));
        }
        self.aircraft.push(aircraft);
        Ok(expected)
    }

    #[inline]
    pub fn get(&self, id: AircraftId) -> Option<&Aircraft> {
        self.aircraft.get(id.slot())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AircraftId) -> Option<&mut Aircraft> {
        self.aircraft.get_mut(id.slot())
    }

    /// Like [`get`](Self::get) but an unknown id is an error.
    pub fn require(&self, id: AircraftId) -> AepResult<&Aircraft> {
        self.get(id).ok_or(AepError::AircraftNotFound(id))
    }

    pub fn require_mut(&mut self, id: AircraftId) -> AepResult<&mut Aircraft> {
        self.get_mut(id).ok_or(AepError::AircraftNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// All aircraft in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Aircraft> {
        self.aircraft.iter()
    }

    /// Number of aircraft currently in `state`.
    pub fn count_in(&self, state: FlightState) -> usize {
        self.aircraft.iter().filter(|a| a.state() == state).count()
    }
}

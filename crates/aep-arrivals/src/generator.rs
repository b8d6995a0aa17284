//! The arrival generator.

use aep_core::{AircraftId, Minute, SimRng};
use rustc_hash::FxHashSet;

/// Draw strictly increasing, collision-free contact minutes in
/// `[0, horizon_hours * 60)`.
///
/// A rate of zero (or less) yields an empty sequence without touching `rng`.
/// The draw whose accumulated time crosses the horizon is discarded.
pub fn contact_minutes(rate_per_hour: f64, horizon_hours: f64, rng: &mut SimRng) -> Vec<Minute> {
    let total_min = (horizon_hours * 60.0) as i64;
    if rate_per_hour <= 0.0 || total_min <= 0 {
        return Vec::new();
    }
    let mean_gap = 60.0 / rate_per_hour;
    let horizon = total_min as f64;

    // 1. Continuous Poisson arrival times.
    let mut continuous = Vec::new();
    let mut t = 0.0;
    loop {
        t += rng.exponential(mean_gap);
        if t >= horizon {
            break;
        }
        continuous.push(t);
    }

    // 2. Whole minutes, bumping collisions forward while inside the horizon.
    let mut taken: FxHashSet<i64> = FxHashSet::default();
    let mut minutes = Vec::with_capacity(continuous.len());
    for t in continuous {
        let mut minute = t as i64;
        while taken.contains(&minute) && minute < total_min {
            minute += 1;
        }
        if minute < total_min {
            taken.insert(minute);
            minutes.push(Minute(minute));
        }
    }

    minutes.sort_unstable();
    minutes
}

/// A day's radar-contact minutes, indexed by aircraft id.
///
/// The `n`-th entry (0-based) is the contact time of `AircraftId(n + 1)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrivalSchedule {
    minutes: Vec<Minute>,
    /// Index of the next aircraft not yet released by [`drain_until`](Self::drain_until).
    cursor: usize,
}

impl ArrivalSchedule {
    /// Run the generator for the given rate and horizon.
    pub fn generate(rate_per_hour: f64, horizon_hours: f64, rng: &mut SimRng) -> Self {
        Self::from_minutes(contact_minutes(rate_per_hour, horizon_hours, rng))
    }

    /// Wrap an explicit list of minutes (sorted and de-duplicated).
    pub fn from_minutes(mut minutes: Vec<Minute>) -> Self {
        minutes.sort_unstable();
        minutes.dedup();
        Self { minutes, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }

    pub fn minutes(&self) -> &[Minute] {
        &self.minutes
    }

    /// Contact time of `id`, if it is part of this schedule.
    pub fn contact_time(&self, id: AircraftId) -> Option<Minute> {
        self.minutes.get(id.slot()).copied()
    }

    /// `(id, contact_time)` pairs in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (AircraftId, Minute)> + '_ {
        self.minutes
            .iter()
            .enumerate()
            .map(|(i, &m)| (AircraftId::from_slot(i), m))
    }

    /// Release every not-yet-released arrival with contact time `< before`.
    ///
    /// The stepper calls this once per tick with the end of the tick span.
    pub fn drain_until(&mut self, before: Minute) -> Vec<(AircraftId, Minute)> {
        let start = self.cursor;
        while self.cursor < self.minutes.len() && self.minutes[self.cursor] < before {
            self.cursor += 1;
        }
        (start..self.cursor)
            .map(|i| (AircraftId::from_slot(i), self.minutes[i]))
            .collect()
    }

    /// Number of arrivals not yet released.
    pub fn pending(&self) -> usize {
        self.minutes.len() - self.cursor
    }
}

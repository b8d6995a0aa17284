//! Simulation time model.
//!
//! # Design
//!
//! Time is an integer count of simulated minutes since the airport opened
//! (minute 0).  It is signed because every aircraft history is seeded one
//! minute before radar contact, which is minute -1 for an aircraft that
//! appears at opening.
//!
//! `SimClock` advances in steps of `tick_minutes` (default 1).  Using an
//! integer minute as the canonical unit keeps arrival bookkeeping exact; only
//! positions and speeds are floating point.

use std::fmt;

// ── Minute ───────────────────────────────────────────────────────────────────

/// An absolute simulation minute.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub i64);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Local wall-clock `(hour, minute)` for an airport opening at `open_hour`.
    pub fn wall_clock(self, open_hour: u32) -> (u32, u32) {
        let total = self.0.rem_euclid(24 * 60) as u32 + open_hour * 60;
        ((total / 60) % 24, total % 60)
    }
}

impl std::ops::Add<i64> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: i64) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl std::ops::Sub<i64> for Minute {
    type Output = Minute;
    #[inline]
    fn sub(self, rhs: i64) -> Minute {
        Minute(self.0 - rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Minute) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current minute and the step size.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Minutes advanced per tick.  Default: 1.
    pub tick_minutes: u32,
    /// The current minute — advanced by `SimClock::advance()` each tick.
    pub current: Minute,
}

impl SimClock {
    pub fn new(tick_minutes: u32) -> Self {
        Self { tick_minutes, current: Minute::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current = self.current + self.tick_minutes as i64;
    }

    /// Length of one tick in minutes, as a float for kinematics.
    #[inline]
    pub fn dt(&self) -> f64 {
        f64::from(self.tick_minutes)
    }

    /// The half-open minute range `[current, current + tick)` covered by this tick.
    #[inline]
    pub fn tick_span(&self) -> std::ops::Range<i64> {
        self.current.0..self.current.0 + self.tick_minutes as i64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = (self.current.0.div_euclid(60), self.current.0.rem_euclid(60));
        write!(f, "{} (+{:02}:{:02})", self.current, h, m)
    }
}

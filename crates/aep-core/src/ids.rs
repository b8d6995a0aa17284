//! Strongly typed aircraft identifier.
//!
//! Ids are handed out by the arrival generator in arrival order starting at
//! 1, so `AircraftId(0)` never names a real aircraft.  Use [`AircraftId::slot`]
//! to index arena storage.

use std::fmt;

/// Unique, immutable identity of one arriving aircraft.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AircraftId(pub u32);

impl AircraftId {
    /// The first id handed out in a run.
    pub const FIRST: AircraftId = AircraftId(1);

    /// Id of the `n`-th aircraft (0-based) in arrival order.
    #[inline(always)]
    pub fn from_slot(n: usize) -> AircraftId {
        AircraftId(n as u32 + 1)
    }

    /// Position of this aircraft in an arena `Vec` (0-based).
    #[inline(always)]
    pub fn slot(self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }
}

impl fmt::Display for AircraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AC{}", self.0)
    }
}

//! Aircraft flight state.

/// Where an aircraft is in its approach lifecycle.
///
/// ```text
/// Flying ──(congestion / wind / storm)──▶ Reversing ──(gap restored)──▶ Flying
///   │                                         │
///   │ position reaches 0                      │ passes entry range
///   ▼                                         ▼
/// Landed                                   Diverted ◀── cannot land before close
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlightState {
    /// Inbound under speed control (initial state).
    #[default]
    Flying,
    /// Flying away from the threshold to restore separation.
    Reversing,
    /// Reached the threshold.  Terminal.
    Landed,
    /// Removed from the sequence for good.  Terminal.
    Diverted,
}

impl FlightState {
    /// `true` for `Landed` and `Diverted`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, FlightState::Landed | FlightState::Diverted)
    }

    /// Label used in CSV exports.
    pub fn as_str(self) -> &'static str {
        match self {
            FlightState::Flying    => "flying",
            FlightState::Reversing => "reversing",
            FlightState::Landed    => "landed",
            FlightState::Diverted  => "diverted",
        }
    }
}

impl std::fmt::Display for FlightState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

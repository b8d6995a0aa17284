//! `aep-fleet` — the aircraft entity and the arena that owns every aircraft.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`state`]      | `FlightState` — flying / reversing / landed / diverted      |
//! | [`snapshot`]   | `Snapshot` — one per-minute history entry                   |
//! | [`aircraft`]   | `Aircraft` — position, speed, neighbours, history           |
//! | [`kinematics`] | `time_to_land`, `minutes_to_threshold`, `StepOutcome`       |
//! | [`fleet`]      | `Fleet` — arena of aircraft indexed by `AircraftId`         |
//!
//! # Movement model
//!
//! Aircraft move along a single range-to-threshold axis.  A flying aircraft
//! closes `speed / 60 * dt` nm per tick and lands when it reaches 0.  A
//! reversing aircraft opens range at the fixed reverse rate and diverts once
//! it passes its original entry range.  Landed and diverted aircraft are
//! frozen.

pub mod aircraft;
pub mod fleet;
pub mod kinematics;
pub mod snapshot;
pub mod state;


pub use aircraft::Aircraft;
pub use fleet::Fleet;
pub use kinematics::{StepOutcome, minutes_to_threshold, time_to_land};
pub use snapshot::Snapshot;
pub use state::FlightState;

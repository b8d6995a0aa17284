//! `aep-core` — foundational types for the AEP arrival sequencing simulator.
//!
//! This crate is a dependency of every other `aep-*` crate.  It has no
//! `aep-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AircraftId`                                          |
//! | [`time`]        | `Minute`, `SimClock`                                  |
//! | [`bands`]       | `SpeedBand`, `SpeedBands` (allowed speed by range)    |
//! | [`config`]      | `ApproachConfig`, `SeparationRules`                   |
//! | [`rng`]         | `SimRng` (seeded, per-run)                            |
//! | [`error`]       | `AepError`, `AepResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod bands;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bands::{SpeedBand, SpeedBands};
pub use config::{ApproachConfig, SeparationRules, STORM_WINDOW_MINUTES};
pub use error::{AepError, AepResult};
pub use ids::AircraftId;
pub use rng::SimRng;
pub use time::{Minute, SimClock};

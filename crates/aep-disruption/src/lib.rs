//! `aep-disruption` — things that break an otherwise orderly arrival stream.
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`wind`]        | `WindShear` — random go-arounds on short final             |
//! | [`storm`]       | `StormWindow` — one 30-minute runway closure per run       |
//! | [`diversion`]   | closing-time feasibility check                             |
//!
//! None of these own aircraft.  They read and mutate aircraft held in a
//! [`Fleet`][aep_fleet::Fleet] for the ids they are handed, and report which
//! ones they touched.  Randomness always comes from an explicit
//! [`SimRng`][aep_core::SimRng].

pub mod diversion;
pub mod storm;
pub mod wind;


pub use diversion::{cannot_land_in_time, divert_unreachable};
pub use storm::StormWindow;
pub use wind::WindShear;

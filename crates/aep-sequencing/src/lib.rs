//! `aep-sequencing` — keeps the arrival stream separated.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`gaps`]      | `gap_minutes`, `compute_gaps` — pure temporal gap arithmetic  |
//! | [`control`]   | `decide` — the per-aircraft speed-control policy              |
//! | [`queue`]     | `SequencingQueue` — ordering, gap assignment, policy pass     |
//!
//! # Separation policy
//!
//! With `g` the gap to the leader (minutes) and `(min, max)` the speed band
//! at the aircraft's position, after first clamping speed down to `max`:
//!
//! ```text
//! no leader      → accelerate to max
//! g <  4         → slow by 20 kt; below min → go around (reverse)
//! 4 <= g < 5     → hold speed
//! g >= 5         → accelerate to max
//! ```
//!
//! The 4–5 minute band is hysteresis: holding there keeps followers from
//! oscillating around the minimum.  The policy only ever sends aircraft into
//! `Reversing`; bringing them back is the stepper's job.

pub mod control;
pub mod gaps;
pub mod queue;

#[cfg(test)]
mod tests;

pub use control::{SpeedDecision, decide};
pub use gaps::{Gaps, compute_gaps, gap_minutes};
pub use queue::{ControlReport, SequencingQueue};

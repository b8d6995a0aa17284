//! `aep-sim` — tick loop stepper for the AEP arrival sequencing simulator.
//!
//! # Tick phases
//!
//! ```text
//! for minute in (0..horizon).step_by(tick):
//!   ① Admit     — aircraft whose contact time falls in this tick join the queue.
//!   ② Divert    — aircraft that can no longer land before closing are diverted.
//!   ③ Sequence  — sort by range, recompute gaps, re-admit reversing aircraft
//!                 whose gap to the new leader has opened up.
//!   ④ Control   — the separation policy sets speeds or sends aircraft around.
//!   ⑤ Disrupt   — storm closure, then short-final wind shear.
//!   ⑥ Move      — every active aircraft advances and records a snapshot;
//!                 landed and diverted aircraft are retired.
//! ```
//!
//! When the horizon is reached every aircraft still active is diverted.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`run_batch`] runs seeds on Rayon's thread pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use aep_core::ApproachConfig;
//! use aep_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(ApproachConfig::default()).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("{summary}");
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;


pub use batch::run_batch;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use summary::{RunSummary, TickSummary};

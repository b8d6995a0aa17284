//! `aep-arrivals` — first-radar-contact times for a day of arrivals.
//!
//! Arrivals follow a homogeneous Poisson process: inter-arrival gaps are
//! exponential with mean `60 / λ` minutes.  Continuous times are truncated to
//! whole minutes and collisions are pushed forward to the next free minute,
//! so at most one aircraft appears on radar per minute.
//!
//! ```rust
//! use aep_arrivals::ArrivalSchedule;
//! use aep_core::SimRng;
//!
//! let mut rng = SimRng::new(42);
//! let schedule = ArrivalSchedule::generate(20.0, 2.0, &mut rng);
//! assert!(schedule.minutes().windows(2).all(|w| w[0] < w[1]));
//! ```

pub mod generator;


pub use generator::{ArrivalSchedule, contact_minutes};

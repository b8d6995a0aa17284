//! Deterministic simulation-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every run owns exactly one root `SimRng` seeded from `ApproachConfig::seed`.
//! The stepper derives one child stream per stochastic process (arrivals,
//! storm, wind) with [`SimRng::child`]:
//!
//!   child_seed = parent.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio.
//! Because each process draws from its own stream, enabling or disabling one
//! disruption does not shift the draws seen by the others, and two runs with
//! the same seed are identical tick for tick.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Used only from the single-threaded stepper.  Parallel Monte Carlo batches
/// give each run its own `SimRng` seeded independently.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Exponentially distributed sample with the given `mean` (inverse CDF).
    ///
    /// `1 - u` lies in `(0, 1]`, so the logarithm is always finite.
    #[inline]
    pub fn exponential(&mut self, mean: f64) -> f64 {
        let u: f64 = self.0.r#gen();
        -mean * (1.0 - u).ln()
    }
}

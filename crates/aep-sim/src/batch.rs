//! Monte Carlo batches: one independent run per seed.

use aep_core::ApproachConfig;

use crate::{NoopObserver, RunSummary, SimBuilder, SimResult};

/// Run one simulated day per seed and return the summaries in seed order.
///
/// Every run gets a copy of `config` with only the seed replaced, so runs
/// share nothing.  With the `parallel` feature the runs execute on Rayon's
/// thread pool; the result order is the same either way.
pub fn run_batch(config: &ApproachConfig, seeds: &[u64]) -> SimResult<Vec<RunSummary>> {
    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_seed(config, seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_seed(config, seed)).collect()
    }
}

fn run_seed(config: &ApproachConfig, seed: u64) -> SimResult<RunSummary> {
    let config = ApproachConfig { seed, ..config.clone() };
    SimBuilder::new(config).build()?.run(&mut NoopObserver)
}

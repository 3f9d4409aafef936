use top_two::Mode;
use tracing::info;

use crate::config::Config;
use crate::harness::{Error, Target, TimingReport};

/// Per-permutation timings of the sequential strategies, each at its own
/// input size.
pub fn run(config: &Config) -> Result<TimingReport, Error> {
    println!("Using {} permutations", config.permutations);

    let mut strategies = Vec::with_capacity(config.timing_sizes.len());
    let mut durations_us = Vec::with_capacity(config.timing_sizes.len());
    for &(strategy, size) in &config.timing_sizes {
        let target = Target::new(Mode::Sequential, strategy)?;
        let column = target.per_call_us(size, config.permutations, config.seed)?;
        info!(%strategy, size, samples = column.len(), "timing collected");
        strategies.push(strategy);
        durations_us.push(column);
    }

    Ok(TimingReport {
        strategies,
        durations_us,
    })
}

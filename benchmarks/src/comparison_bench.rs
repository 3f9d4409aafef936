use top_two::Mode;
use tracing::info;

use crate::config::Config;
use crate::harness::{BenchResult, ComparisonReport, Error, Target};

/// Mean duration of every strategy of `mode` at every configured size.
/// Parallel strategies run on whichever rayon pool the caller installed.
pub fn run(config: &Config, mode: Mode) -> Result<ComparisonReport, Error> {
    let targets = mode
        .strategies()
        .iter()
        .map(|&s| Target::new(mode, s))
        .collect::<Result<Vec<_>, _>>()?;

    println!("Using {} permutations", config.permutations);

    let mut results = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        println!(
            "Dataset: {} x {} = {} elements",
            config.permutations,
            size,
            config.permutations * size
        );

        let mut durations_ms = Vec::with_capacity(targets.len());
        for target in &targets {
            if config.skips(target.strategy, size) {
                info!(%mode, strategy = %target.strategy, size, "skipped");
                durations_ms.push(None);
                continue;
            }
            let ms = target.mean_duration_ms(size, config.permutations, config.seed)?;
            info!(%mode, strategy = %target.strategy, size, ms, "measured");
            durations_ms.push(Some(ms));
        }
        results.push(BenchResult { size, durations_ms });
    }

    Ok(ComparisonReport {
        mode,
        strategies: mode.strategies().to_vec(),
        results,
    })
}

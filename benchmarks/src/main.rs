mod comparison_bench;
mod config;
mod dataset;
mod harness;
mod report;
mod timing_bench;

use clap::{Parser, ValueEnum};
use top_two::Mode;
use tracing::error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Config;
use crate::harness::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Bench {
    /// Sequential strategies across sizes
    Comparison,
    /// Parallel strategies across sizes
    Parallel,
    /// Per-permutation timings of the sequential strategies
    Timing,
    All,
}

#[derive(Parser)]
#[command(about = "Time the top-two strategies and write the results as CSV")]
struct Args {
    /// Benchmark to run
    #[arg(long, value_enum, default_value_t = Bench::All)]
    bench: Bench,

    /// Comma-separated input sizes for the comparison benches
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Shuffled permutations timed per size
    #[arg(long)]
    permutations: Option<usize>,
}

fn run(bench: Bench, config: &Config) -> Result<(), Error> {
    let wants = |b: Bench| bench == Bench::All || bench == b;

    if wants(Bench::Comparison) {
        let comparison = comparison_bench::run(config, Mode::Sequential)?;
        harness::print_table(&comparison);
        report::write_comparison(&config.out_dir, &comparison)?;
    }

    if wants(Bench::Parallel) {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        let comparison = pool.install(|| comparison_bench::run(config, Mode::Parallel))?;
        harness::print_table(&comparison);
        report::write_comparison(&config.out_dir, &comparison)?;
    }

    if wants(Bench::Timing) {
        let timing = timing_bench::run(config)?;
        harness::print_timing_table(&timing);
        report::write_timing(&config.out_dir, &timing)?;
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("off")),
                ),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::default();
    if let Some(sizes) = args.sizes {
        config.sizes = sizes;
    }
    if let Some(permutations) = args.permutations {
        config.permutations = permutations;
    }

    if let Err(e) = run(args.bench, &config) {
        error!(error = %e, "benchmark failed");
        eprintln!("Benchmark failed: {}", e);
        std::process::exit(1);
    }
}

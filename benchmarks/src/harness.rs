use std::hint::black_box;
use std::time::{Duration, Instant};

use top_two::{Mode, Strategy, StrategyFn, Summary};
use tracing::debug;

use crate::dataset::Permutations;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Compute(#[from] top_two::Error),
    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("{mode}/{strategy} on size {size}: expected ({expected}), got ({actual})")]
    Mismatch {
        mode: Mode,
        strategy: Strategy,
        size: usize,
        expected: Summary,
        actual: Summary,
    },
}

/// Mean per-call durations of every strategy at one input size.
pub struct BenchResult {
    pub size: usize,
    /// One entry per strategy column; `None` when skipped.
    pub durations_ms: Vec<Option<f64>>,
}

pub struct ComparisonReport {
    pub mode: Mode,
    pub strategies: Vec<Strategy>,
    pub results: Vec<BenchResult>,
}

pub struct TimingReport {
    pub strategies: Vec<Strategy>,
    /// One column per strategy, one value per permutation, in µs.
    pub durations_us: Vec<Vec<f64>>,
}

/// A strategy bound to the mode it runs in.
#[derive(Copy, Clone)]
pub struct Target {
    pub mode: Mode,
    pub strategy: Strategy,
    f: StrategyFn,
}

impl Target {
    pub fn new(mode: Mode, strategy: Strategy) -> Result<Self, Error> {
        let f = top_two::resolve(mode, strategy)?;
        Ok(Self { mode, strategy, f })
    }

    /// Time a single call. Input and output go through `black_box` so the
    /// call cannot be elided.
    pub fn time_call(&self, values: &[i32]) -> Result<(Duration, Summary), Error> {
        let start = Instant::now();
        let summary = (self.f)(black_box(values))?;
        let elapsed = start.elapsed();
        Ok((elapsed, black_box(summary)))
    }

    /// Permutations of `0..size` always have `size - 1` and `size - 2` on top.
    fn verify(&self, size: usize, actual: Summary) -> Result<(), Error> {
        let expected = Summary::new(size as i32 - 1, size as i32 - 2);
        if actual != expected {
            return Err(Error::Mismatch {
                mode: self.mode,
                strategy: self.strategy,
                size,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Call once per permutation and hand each duration to `record`. The
    /// first result is checked against the known answer.
    fn for_each_permutation(
        &self,
        size: usize,
        count: usize,
        seed: u64,
        mut record: impl FnMut(Duration),
    ) -> Result<(), Error> {
        let mut perms = Permutations::new(size, count, seed);
        let mut first = true;
        while let Some(values) = perms.next_permutation() {
            let (elapsed, summary) = self.time_call(values)?;
            if first {
                self.verify(size, summary)?;
                first = false;
            }
            record(elapsed);
        }
        debug!(mode = %self.mode, strategy = %self.strategy, size, count, "timed");
        Ok(())
    }

    /// Mean duration per call in milliseconds; NaN when `count` is 0.
    pub fn mean_duration_ms(&self, size: usize, count: usize, seed: u64) -> Result<f64, Error> {
        let mut total = Duration::ZERO;
        self.for_each_permutation(size, count, seed, |d| total += d)?;
        Ok(total.as_secs_f64() * 1000.0 / count as f64)
    }

    /// Duration of every call in microseconds.
    pub fn per_call_us(&self, size: usize, count: usize, seed: u64) -> Result<Vec<f64>, Error> {
        let mut out = Vec::with_capacity(count);
        self.for_each_permutation(size, count, seed, |d| out.push(d.as_secs_f64() * 1e6))?;
        Ok(out)
    }
}

/// Median of a set of samples; NaN when empty.
pub fn median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    let mut times = samples.to_vec();
    times.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    times[times.len() / 2]
}

/// Print a size-by-strategy table of mean durations to stdout.
pub fn print_table(report: &ComparisonReport) {
    let size_w = 10;
    let col_w = 18;

    println!();
    println!("{}", report.mode);
    print!("{:>size_w$}", "Size", size_w = size_w);
    for strategy in &report.strategies {
        print!(" {:>col_w$}", strategy.name(), col_w = col_w);
    }
    println!();
    println!("{}", "-".repeat(size_w + (col_w + 1) * report.strategies.len()));

    for r in &report.results {
        print!("{:>size_w$}", r.size, size_w = size_w);
        for d in &r.durations_ms {
            let cell = match d {
                Some(ms) => format!("{:.4}ms", ms),
                None => "N/A".to_string(),
            };
            print!(" {:>col_w$}", cell, col_w = col_w);
        }
        println!();
    }
    println!();
}

/// Print the median per-call time of each timing column.
pub fn print_timing_table(report: &TimingReport) {
    let name_w = 20;
    let col_w = 14;

    println!();
    println!(
        "{:<name_w$} {:>col_w$} {:>col_w$}",
        "Strategy", "Median", "Samples",
        name_w = name_w, col_w = col_w
    );
    println!("{}", "-".repeat(name_w + col_w * 2 + 2));

    for (strategy, column) in report.strategies.iter().zip(&report.durations_us) {
        println!(
            "{:<name_w$} {:>col_w$} {:>col_w$}",
            strategy.name(),
            format!("{:.1}us", median(column)),
            column.len(),
            name_w = name_w, col_w = col_w
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 3.0);
        assert!(median(&[]).is_nan());
    }

    #[test]
    fn test_mean_duration_is_finite() {
        let target = Target::new(Mode::Sequential, Strategy::Accumulate).unwrap();
        let ms = target.mean_duration_ms(1_000, 5, 19937).unwrap();
        assert!(ms.is_finite() && ms >= 0.0);
        assert!(target.mean_duration_ms(1_000, 0, 19937).unwrap().is_nan());
    }

    #[test]
    fn test_per_call_samples() {
        let target = Target::new(Mode::Parallel, Strategy::Reduce).unwrap();
        let samples = target.per_call_us(500, 4, 1).unwrap();
        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|us| *us >= 0.0));
    }

    #[test]
    fn test_unsupported_target() {
        assert!(matches!(
            Target::new(Mode::Sequential, Strategy::Reduce),
            Err(Error::Compute(top_two::Error::Unsupported { .. }))
        ));
    }

    #[test]
    fn test_verify_reports_mismatch() {
        let target = Target::new(Mode::Sequential, Strategy::Sort).unwrap();
        let err = target.verify(10, Summary::new(9, 7)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "sequential/sort on size 10: expected (largest: 9, second largest: 8), \
             got (largest: 9, second largest: 7)"
        );
    }

    #[test]
    fn test_too_small_size_fails() {
        let target = Target::new(Mode::Sequential, Strategy::Sort).unwrap();
        assert!(matches!(
            target.mean_duration_ms(1, 3, 0),
            Err(Error::Compute(top_two::Error::InvalidArgument { len: 1 }))
        ));
    }
}

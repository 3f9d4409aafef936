use std::fs;
use std::path::{Path, PathBuf};

use top_two::Mode;
use tracing::info;

use crate::harness::{ComparisonReport, Error, TimingReport};

pub fn comparison_file_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Sequential => "comparison_of_algorithms.csv",
        Mode::Parallel => "comparison_of_algorithms_parallel.csv",
    }
}

pub const TIMING_FILE_NAME: &str = "timing_data.csv";

/// Skipped or undefined durations are written as `NaN`.
fn format_duration(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => v.to_string(),
        _ => "NaN".to_string(),
    }
}

/// Write `size,<strategy>...` and one row per size. Returns the file path.
pub fn write_comparison(dir: &Path, report: &ComparisonReport) -> Result<PathBuf, Error> {
    fs::create_dir_all(dir)?;
    let path = dir.join(comparison_file_name(report.mode));
    let mut writer = csv::Writer::from_path(&path)?;

    let header = std::iter::once("size").chain(report.strategies.iter().map(|s| s.name()));
    writer.write_record(header)?;
    for result in &report.results {
        let row = std::iter::once(result.size.to_string())
            .chain(result.durations_ms.iter().map(|&d| format_duration(d)));
        writer.write_record(row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = report.results.len(), "comparison written");
    Ok(path)
}

/// Write one column per strategy and one row per permutation.
pub fn write_timing(dir: &Path, report: &TimingReport) -> Result<PathBuf, Error> {
    fs::create_dir_all(dir)?;
    let path = dir.join(TIMING_FILE_NAME);
    let mut writer = csv::Writer::from_path(&path)?;

    writer.write_record(report.strategies.iter().map(|s| s.name()))?;
    let rows = report.durations_us.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..rows {
        let row = report
            .durations_us
            .iter()
            .map(|column| format_duration(column.get(i).copied()));
        writer.write_record(row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows, "timing data written");
    Ok(path)
}

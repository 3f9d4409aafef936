use std::io::{self, Write};

use top_two::cases::CASES;
use top_two::{compute, Mode, Summary};
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Write one case line and return whether it passed.
fn check(
    out: &mut impl Write,
    label: &str,
    expected: Summary,
    actual: Result<Summary, top_two::Error>,
) -> io::Result<bool> {
    match actual {
        Ok(actual) if actual == expected => {
            writeln!(out, "{}: OK", label)?;
            Ok(true)
        }
        Ok(actual) => {
            writeln!(
                out,
                "{}: FAILED (expected: {}, actual: {})",
                label, expected, actual
            )?;
            Ok(false)
        }
        Err(e) => {
            writeln!(out, "{}: FAILED (expected: {}, error: {})", label, expected, e)?;
            Ok(false)
        }
    }
}

fn run(out: &mut impl Write) -> io::Result<usize> {
    let mut failures = 0;
    for mode in Mode::ALL {
        writeln!(out, "{}\n", mode)?;
        for &strategy in mode.strategies() {
            for case in &CASES {
                let label = format!("{}/{}/{}", mode, strategy, case.name);
                let actual = compute(mode, strategy, case.values);
                if !check(out, &label, case.expected, actual)? {
                    warn!(%label, "case failed");
                    failures += 1;
                }
            }
        }
        writeln!(out)?;
    }
    Ok(failures)
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

    let stdout = io::stdout();
    match run(&mut stdout.lock()) {
        Ok(0) => {}
        Ok(failures) => {
            eprintln!("{} case(s) failed", failures);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to write report: {}", e);
            std::process::exit(1);
        }
    }
}

//! Command runners invoked by the `bindec` binary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bindec_core::{BenchmarkDriver, BenchmarkSeries, Progress, run_demo};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Result;
use crate::config::Config;
use crate::report::{BenchReport, DemoReport};

/// Validate `input`, run both converters once and write the comparison.
///
/// Invalid input aborts before anything is written to `out`.
pub fn run_convert(config: &Config, input: &str, out: &mut impl Write) -> Result<DemoReport> {
    let outcome = run_demo(input, &config.demo_options())?;
    let report = DemoReport::from_outcome(&outcome);
    report.write(config.output.format, out)?;
    Ok(report)
}

/// Run the configured sweep and collect both series.
pub fn run_sweep(config: &Config) -> Result<BenchmarkSeries> {
    let sizes = config.schedule.sizes();
    let rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let mut driver = BenchmarkDriver::new(rng, config.recursion_stack());
    let series = driver.run_with_progress(&sizes, log_progress)?;
    Ok(series)
}

/// Run the sweep and write the report to `output`, or `out` when unset.
pub fn run_bench(config: &Config, output: Option<&Path>, out: &mut impl Write) -> Result<BenchReport> {
    let series = run_sweep(config)?;
    let report = BenchReport::from_series(&series, config.seed);

    if let Some(path) = output {
        let mut file = BufWriter::new(File::create(path)?);
        report.write(config.output.format, &mut file)?;
        file.flush()?;
        tracing::info!("Report written to {}", path.display());
    } else {
        report.write(config.output.format, out)?;
    }

    tracing::info!("{}", report.summary());
    Ok(report)
}

fn log_progress(progress: Progress) {
    tracing::info!(
        "Processing input size N = {} ({}/{}, {:.0}%)",
        progress.size,
        progress.index + 1,
        progress.total,
        progress.fraction() * 100.0
    );
}

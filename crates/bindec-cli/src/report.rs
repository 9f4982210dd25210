//! Report rendering for demo runs and benchmark sweeps.
//!
//! Every renderer writes to any `io::Write`, so the same code serves stdout
//! and `--output` files.

use std::io::Write;

use bindec_core::{BenchmarkSeries, DemoOutcome};
use serde::Serialize;

use crate::{Error, Result};
use crate::config::OutputFormat;

/// One converter's result in a demo run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlgorithmResult {
    pub algorithm: &'static str,
    pub method: &'static str,
    pub decimal: String,
    pub elapsed_ms: f64,
}

/// Serializable view of a [`DemoOutcome`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DemoReport {
    pub input: String,
    pub digits: usize,
    pub iterative: AlgorithmResult,
    pub recursive: AlgorithmResult,
    pub faster: &'static str,
    pub difference_ms: f64,
}

impl DemoReport {
    #[must_use]
    pub fn from_outcome(outcome: &DemoOutcome) -> Self {
        let [iterative, recursive] = outcome.samples().map(|sample| AlgorithmResult {
            algorithm: sample.algorithm.label(),
            method: sample.algorithm.method(),
            decimal: outcome.timing(sample.algorithm).value.to_string(),
            elapsed_ms: sample.elapsed_ms,
        });

        Self {
            input: outcome.input.to_string(),
            digits: outcome.input.digit_count(),
            iterative,
            recursive,
            faster: outcome.faster().label(),
            difference_ms: outcome.difference_ms(),
        }
    }

    /// Write the report as text or JSON. CSV is only defined for sweeps.
    pub fn write(&self, format: OutputFormat, out: &mut impl Write) -> Result<()> {
        match format {
            OutputFormat::Table => self.write_text(out)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
            OutputFormat::Csv => {
                return Err(Error::Config(
                    "csv output is only available for bench, use table or json for convert".into(),
                ));
            }
        }
        Ok(())
    }

    fn write_text(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Input: {} ({} digits)", self.input, self.digits)?;
        for result in [&self.iterative, &self.recursive] {
            writeln!(out)?;
            writeln!(out, "[{}] {}", result.algorithm, result.method)?;
            writeln!(out, "  decimal : {}", result.decimal)?;
            writeln!(out, "  time    : {:.6} ms", result.elapsed_ms)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "{} was faster by {:.6} ms on this run",
            self.faster, self.difference_ms
        )?;
        Ok(())
    }
}

/// One row of a benchmark report.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct BenchPoint {
    pub size: usize,
    pub iterative_ms: f64,
    pub recursive_ms: f64,
}

/// Serializable view of a [`BenchmarkSeries`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BenchReport {
    pub seed: Option<u64>,
    pub points: Vec<BenchPoint>,
}

impl BenchReport {
    #[must_use]
    pub fn from_series(series: &BenchmarkSeries, seed: Option<u64>) -> Self {
        let points = series
            .rows()
            .map(|(size, iterative_ms, recursive_ms)| BenchPoint {
                size,
                iterative_ms,
                recursive_ms,
            })
            .collect();
        Self { seed, points }
    }

    /// One-line summary of what was measured.
    #[must_use]
    pub fn summary(&self) -> String {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => format!(
                "Benchmark completed on {} data points ({} to {} digits)",
                self.points.len(),
                first.size,
                last.size
            ),
            _ => "Benchmark completed on 0 data points".to_string(),
        }
    }

    pub fn write(&self, format: OutputFormat, out: &mut impl Write) -> Result<()> {
        match format {
            OutputFormat::Table => self.write_table(out),
            OutputFormat::Csv => self.write_csv(out),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
                Ok(())
            }
        }
    }

    fn write_table(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{:>8}  {:>16}  {:>16}", "size", "iterative (ms)", "recursive (ms)")?;
        for p in &self.points {
            writeln!(
                out,
                "{:>8}  {:>16.6}  {:>16.6}",
                p.size, p.iterative_ms, p.recursive_ms
            )?;
        }
        writeln!(out, "{}", self.summary())?;
        Ok(())
    }

    fn write_csv(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "size,iterative_ms,recursive_ms")?;
        for p in &self.points {
            writeln!(out, "{},{},{}", p.size, p.iterative_ms, p.recursive_ms)?;
        }
        Ok(())
    }
}

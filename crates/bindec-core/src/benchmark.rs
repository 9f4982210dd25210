//! Benchmark driver.
//!
//! Sweeps an ordered list of input sizes. At each size one fresh input is
//! generated and both converters are timed on that same input, so the two
//! series are always aligned to the size sequence.

use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::convert::{Algorithm, convert_iterative, convert_recursive};
use crate::error::{BinDecError, Result};
use crate::generator::generate_random_binary;
use crate::stack::RecursionStack;
use crate::timing::timed_call;

/// Half-open range of input sizes `[start, end)` stepped by `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSchedule {
    pub start: NonZeroUsize,
    pub end: usize,
    pub step: NonZeroUsize,
}

impl SizeSchedule {
    /// `10, 60, 110, ..., 4960`.
    pub const DEFAULT: Self = Self {
        start: match NonZeroUsize::new(10) {
            Some(n) => n,
            None => NonZeroUsize::MIN,
        },
        end: 5001,
        step: match NonZeroUsize::new(50) {
            Some(n) => n,
            None => NonZeroUsize::MIN,
        },
    };

    /// Create a schedule, rejecting an empty range.
    pub fn new(start: NonZeroUsize, end: usize, step: NonZeroUsize) -> Result<Self> {
        if start.get() >= end {
            return Err(BinDecError::invalid_schedule(format!(
                "start {start} is not below end {end}"
            )));
        }
        Ok(Self { start, end, step })
    }

    /// Expand into the ordered list of sizes.
    #[must_use]
    pub fn sizes(&self) -> Vec<NonZeroUsize> {
        (self.start.get()..self.end)
            .step_by(self.step.get())
            .filter_map(NonZeroUsize::new)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        if self.start.get() >= self.end {
            0
        } else {
            (self.end - self.start.get()).div_ceil(self.step.get())
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SizeSchedule {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Where the sweep currently is, for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Zero-based index of the size being processed.
    pub index: usize,
    /// Input size being processed.
    pub size: NonZeroUsize,
    /// Total number of sizes in the sweep.
    pub total: usize,
}

impl Progress {
    /// Fraction complete once this step finishes, in `(0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            (self.index + 1) as f64 / self.total as f64
        }
    }
}

/// Two duration series aligned to the same sizes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkSeries {
    pub sizes: Vec<usize>,
    pub iterative: Vec<f64>,
    pub recursive: Vec<f64>,
}

impl BenchmarkSeries {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            sizes: Vec::with_capacity(capacity),
            iterative: Vec::with_capacity(capacity),
            recursive: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Durations for one algorithm.
    #[must_use]
    pub fn series(&self, algorithm: Algorithm) -> &[f64] {
        match algorithm {
            Algorithm::Iterative => &self.iterative,
            Algorithm::Recursive => &self.recursive,
        }
    }

    /// Iterate `(size, iterative_ms, recursive_ms)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.sizes
            .iter()
            .zip(&self.iterative)
            .zip(&self.recursive)
            .map(|((&size, &it), &rec)| (size, it, rec))
    }
}

/// Drives the sweep with a caller-supplied RNG and worker stack.
#[derive(Debug)]
pub struct BenchmarkDriver<R> {
    rng: R,
    stack: RecursionStack,
}

impl<R: Rng + Send> BenchmarkDriver<R> {
    #[must_use]
    pub const fn new(rng: R, stack: RecursionStack) -> Self {
        Self { rng, stack }
    }

    /// Run the sweep without progress reporting.
    pub fn run(&mut self, sizes: &[NonZeroUsize]) -> Result<BenchmarkSeries> {
        self.run_with_progress(sizes, |_| {})
    }

    /// Run the sweep, calling `on_progress` before each size is processed.
    ///
    /// The whole sweep executes on one enlarged-stack worker, so thread
    /// startup never lands inside a timing sample.
    pub fn run_with_progress<P>(
        &mut self,
        sizes: &[NonZeroUsize],
        mut on_progress: P,
    ) -> Result<BenchmarkSeries>
    where
        P: FnMut(Progress) + Send,
    {
        let total = sizes.len();
        if let Some(deepest) = sizes.iter().copied().max() {
            self.stack.ensure_depth(deepest.get())?;
        }
        tracing::info!(
            "Starting benchmark sweep over {total} input sizes (stack {} bytes)",
            self.stack.size()
        );

        let rng = &mut self.rng;
        let series = self.stack.run(move || {
            let mut series = BenchmarkSeries::with_capacity(total);
            for (index, &size) in sizes.iter().enumerate() {
                on_progress(Progress { index, size, total });

                let input = generate_random_binary(size, &mut *rng);
                let iterative = timed_call(|| convert_iterative(input.value()));
                let recursive = timed_call(|| convert_recursive(input.value()));
                debug_assert_eq!(iterative.value, recursive.value);

                tracing::debug!(
                    size = size.get(),
                    iterative_ms = iterative.elapsed_ms(),
                    recursive_ms = recursive.elapsed_ms(),
                    "trial finished"
                );

                series.sizes.push(size.get());
                series.iterative.push(iterative.elapsed_ms());
                series.recursive.push(recursive.elapsed_ms());
            }
            series
        })?;

        tracing::info!("Benchmark finished on {} data points", series.len());
        Ok(series)
    }
}

/// Run the sweep over `sizes` with an entropy-seeded RNG and the default stack.
pub fn run_benchmark(sizes: &[NonZeroUsize]) -> Result<BenchmarkSeries> {
    BenchmarkDriver::new(StdRng::from_entropy(), RecursionStack::default()).run(sizes)
}

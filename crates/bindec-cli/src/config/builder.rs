//! Configuration builder

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use bindec_core::{DEFAULT_MAX_INPUT_DIGITS, DEFAULT_STACK_SIZE, DemoOptions, RecursionStack, SizeSchedule};

use crate::Error;

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub schedule: SizeSchedule,
    pub seed: Option<u64>,
    pub execution: ExecutionConfig,
    pub output: OutputConfig,
    pub telemetry: TelemetryConfig,
}

impl Config {
    #[must_use]
    pub const fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    #[must_use]
    pub const fn schedule(&self) -> &SizeSchedule {
        &self.schedule
    }

    #[must_use]
    pub const fn recursion_stack(&self) -> RecursionStack {
        RecursionStack::new(self.execution.stack_size)
    }

    #[must_use]
    pub const fn demo_options(&self) -> DemoOptions {
        DemoOptions {
            max_input_digits: self.execution.max_input_digits,
            stack: self.recursion_stack(),
        }
    }
}

/// Limits applied while converting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Worker stack size in bytes for the recursive converter
    pub stack_size: NonZeroUsize,
    /// Longest accepted user input
    pub max_input_digits: NonZeroUsize,
}

/// Report rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!(
                "Unknown output format '{other}', expected table, csv or json"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub json_logs: bool,
}

/// Configuration builder with fluent API
#[derive(Debug)]
pub struct ConfigBuilder {
    start: usize,
    end: usize,
    step: usize,
    seed: Option<u64>,
    stack_size: usize,
    max_input_digits: usize,
    format: OutputFormat,
    telemetry: TelemetryConfig,
}

impl ConfigBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: SizeSchedule::DEFAULT.start.get(),
            end: SizeSchedule::DEFAULT.end,
            step: SizeSchedule::DEFAULT.step.get(),
            seed: None,
            stack_size: DEFAULT_STACK_SIZE.get(),
            max_input_digits: DEFAULT_MAX_INPUT_DIGITS,
            format: OutputFormat::Table,
            telemetry: TelemetryConfig {
                log_level: String::new(),
                json_logs: false,
            },
        }
    }

    /// First input size of the sweep
    #[must_use]
    pub const fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Exclusive upper bound of the sweep
    #[must_use]
    pub const fn end(mut self, end: usize) -> Self {
        self.end = end;
        self
    }

    #[must_use]
    pub const fn step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Fix the RNG seed so generated inputs are reproducible
    #[must_use]
    pub const fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = bytes;
        self
    }

    #[must_use]
    pub const fn max_input_digits(mut self, digits: usize) -> Self {
        self.max_input_digits = digits;
        self
    }

    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn log_level(mut self, level: String) -> Self {
        self.telemetry.log_level = level;
        self
    }

    #[must_use]
    pub const fn json_logs(mut self, enabled: bool) -> Self {
        self.telemetry.json_logs = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> crate::Result<Config> {
        let start = NonZeroUsize::new(self.start)
            .ok_or_else(|| Error::Config("start size must be at least 1".into()))?;
        let step = NonZeroUsize::new(self.step)
            .ok_or_else(|| Error::Config("step must be non-zero".into()))?;
        let schedule = SizeSchedule::new(start, self.end, step)
            .map_err(|e| Error::Config(e.to_string()))?;

        let stack_size = NonZeroUsize::new(self.stack_size)
            .ok_or_else(|| Error::Config("stack_size must be non-zero".into()))?;
        let max_input_digits = NonZeroUsize::new(self.max_input_digits)
            .ok_or_else(|| Error::Config("max_input_digits must be non-zero".into()))?;

        // The recursive converter goes one frame deep per digit, for user
        // input and for every sweep size alike
        let largest_size = schedule.sizes().last().map_or(0, |s| s.get());
        let deepest = max_input_digits.get().max(largest_size);
        if RecursionStack::new(stack_size).max_digits() < deepest {
            return Err(Error::Config(format!(
                "stack_size {stack_size} bytes is too small for max_input_digits {max_input_digits} \
                 (largest sweep size {largest_size}), at least {} bytes are needed",
                RecursionStack::required_size(deepest)
            )));
        }

        let log_level = if self.telemetry.log_level.is_empty() {
            "info".to_string()
        } else {
            self.telemetry.log_level
        };

        Ok(Config {
            schedule,
            seed: self.seed,
            execution: ExecutionConfig {
                stack_size,
                max_input_digits,
            },
            output: OutputConfig {
                format: self.format,
            },
            telemetry: TelemetryConfig {
                log_level,
                json_logs: self.telemetry.json_logs,
            },
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

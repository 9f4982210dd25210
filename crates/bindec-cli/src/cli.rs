//! Command-line arguments and their overlay on file and env configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::Result;
use crate::config::{self, Config, ConfigBuilder, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "bindec")]
#[command(about = "Compare iterative and recursive binary-to-decimal conversion", long_about = None)]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable JSON logging output
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Report format: table or json, plus csv for bench
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Worker stack size in bytes for the recursive converter
    #[arg(long, global = true)]
    pub stack_size: Option<usize>,

    /// Longest binary input accepted, in digits
    #[arg(long, global = true)]
    pub max_digits: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert one binary number with both algorithms and compare timings
    Convert {
        /// Binary digits, e.g. 1101
        binary: String,
    },

    /// Time both algorithms over a sweep of input sizes
    Bench {
        /// First input size in digits
        #[arg(long)]
        start: Option<usize>,

        /// Exclusive upper bound on input size
        #[arg(long)]
        end: Option<usize>,

        /// Distance between consecutive sizes
        #[arg(long)]
        step: Option<usize>,

        /// RNG seed for reproducible inputs
        #[arg(long, env = "BINDEC_SEED")]
        seed: Option<u64>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Args {
    /// Report destination for `bench`, if one was given.
    #[must_use]
    pub fn output(&self) -> Option<&std::path::Path> {
        match &self.command {
            Command::Bench { output, .. } => output.as_deref(),
            Command::Convert { .. } => None,
        }
    }
}

/// Overlay command-line flags on `builder`. Flags left unset keep the
/// file and env values already in `builder`.
pub fn apply_args(mut builder: ConfigBuilder, args: &Args) -> Result<ConfigBuilder> {
    if let Some(ref format) = args.format {
        builder = builder.format(format.parse::<OutputFormat>()?);
    }

    if let Some(bytes) = args.stack_size {
        builder = builder.stack_size(bytes);
    }

    if let Some(digits) = args.max_digits {
        builder = builder.max_input_digits(digits);
    }

    if args.verbose {
        builder = builder.log_level("debug".to_string());
    }

    if args.json_logs {
        builder = builder.json_logs(true);
    }

    if let Command::Bench {
        start,
        end,
        step,
        seed,
        ..
    } = args.command
    {
        if let Some(start) = start {
            builder = builder.start(start);
        }
        if let Some(end) = end {
            builder = builder.end(end);
        }
        if let Some(step) = step {
            builder = builder.step(step);
        }
        if seed.is_some() {
            builder = builder.seed(seed);
        }
    }

    Ok(builder)
}

/// Resolve the final configuration.
///
/// Precedence: CLI flags > env > file > defaults
pub fn resolve_config(args: &Args) -> Result<Config> {
    let builder = if let Some(ref path) = args.config {
        config::load_config_from_path(path)?
    } else {
        config::load_config()?
    };

    apply_args(builder, args)?.build()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::config::with_env_vars;

    const FILE_CONFIG: &str = r#"
[benchmark]
start = 20
end = 1001
step = 100
seed = 9

[execution]
stack_size = 33554432
max_input_digits = 2000

[output]
format = "json"
"#;

    fn config_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FILE_CONFIG.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn parse(file: &NamedTempFile, extra: &[&str]) -> Args {
        let path = file.path().to_str().unwrap();
        let mut argv = vec!["bindec", "--config", path];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_file_values_without_env_or_flags() {
        let file = config_file();
        with_env_vars(&[], || {
            let config = resolve_config(&parse(&file, &["bench"])).unwrap();
            assert_eq!(config.schedule.start.get(), 20);
            assert_eq!(config.schedule.end, 1001);
            assert_eq!(config.schedule.step.get(), 100);
            assert_eq!(config.seed, Some(9));
            assert_eq!(config.execution.stack_size.get(), 33_554_432);
            assert_eq!(config.execution.max_input_digits.get(), 2000);
            assert_eq!(config.output.format, OutputFormat::Json);
        });
    }

    #[test]
    fn test_env_overrides_file() {
        let file = config_file();
        with_env_vars(
            &[
                ("BINDEC_START", "30"),
                ("BINDEC_SEED", "10"),
                ("BINDEC_STACK_SIZE", "50331648"),
                ("BINDEC_FORMAT", "table"),
            ],
            || {
                let config = resolve_config(&parse(&file, &["bench"])).unwrap();
                assert_eq!(config.schedule.start.get(), 30);
                assert_eq!(config.schedule.step.get(), 100);
                assert_eq!(config.seed, Some(10));
                assert_eq!(config.execution.stack_size.get(), 50_331_648);
                assert_eq!(config.output.format, OutputFormat::Table);
            },
        );
    }

    #[test]
    fn test_flags_override_env_and_file() {
        let file = config_file();
        with_env_vars(
            &[
                ("BINDEC_START", "30"),
                ("BINDEC_STACK_SIZE", "50331648"),
                ("BINDEC_MAX_DIGITS", "500"),
            ],
            || {
                let args = parse(
                    &file,
                    &[
                        "--stack-size",
                        "67108864",
                        "--format",
                        "csv",
                        "bench",
                        "--start",
                        "40",
                        "--seed",
                        "11",
                    ],
                );
                let config = resolve_config(&args).unwrap();
                assert_eq!(config.schedule.start.get(), 40);
                assert_eq!(config.schedule.end, 1001);
                assert_eq!(config.seed, Some(11));
                assert_eq!(config.execution.stack_size.get(), 67_108_864);
                assert_eq!(config.execution.max_input_digits.get(), 500);
                assert_eq!(config.output.format, OutputFormat::Csv);
            },
        );
    }

    #[test]
    fn test_convert_ignores_sweep_values() {
        let file = config_file();
        with_env_vars(&[], || {
            let args = parse(&file, &["--max-digits", "64", "convert", "1101"]);
            assert!(args.output().is_none());
            let config = resolve_config(&args).unwrap();
            assert_eq!(config.execution.max_input_digits.get(), 64);
            assert_eq!(config.schedule.start.get(), 20);
        });
    }

    #[test]
    fn test_bench_output_path() {
        let args = Args::try_parse_from(["bindec", "bench", "-o", "report.csv"]).unwrap();
        assert_eq!(args.output(), Some(std::path::Path::new("report.csv")));
    }

    #[test]
    fn test_flag_stack_below_floor_is_config_error() {
        let file = config_file();
        with_env_vars(&[], || {
            let args = parse(&file, &["--stack-size", "1048576", "convert", "1"]);
            let err = resolve_config(&args).unwrap_err();
            assert!(err.is_config());
        });
    }

    #[test]
    fn test_unknown_format_flag_rejected() {
        let file = config_file();
        with_env_vars(&[], || {
            let err = resolve_config(&parse(&file, &["--format", "svg", "bench"])).unwrap_err();
            assert!(err.is_config());
        });
    }
}

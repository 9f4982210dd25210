//! TOML configuration file loading

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::builder::{ConfigBuilder, OutputFormat};
use crate::Result;

/// Configuration file locations checked in order
const CONFIG_PATHS: &[&str] = &[
    "./bindec.toml",
    "~/.config/bindec/config.toml",
    "/etc/bindec/config.toml",
];

/// Find the first existing configuration file
pub fn find_config_file() -> Option<PathBuf> {
    for path_str in CONFIG_PATHS {
        let path = if path_str.starts_with('~') {
            if let Ok(home) = std::env::var("HOME") {
                PathBuf::from(path_str.replacen('~', &home, 1))
            } else {
                continue;
            }
        } else {
            PathBuf::from(path_str)
        };

        if path.exists() {
            return Some(path);
        }
    }
    None
}

/// Load configuration from a TOML file
pub fn load_from_file(path: &Path, mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::Error::Config(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    let file_config: FileConfig = toml::from_str(&content).map_err(|e| {
        crate::Error::Config(format!(
            "Failed to parse config file {}: {}",
            path.display(),
            e
        ))
    })?;

    builder = apply_file_config(builder, file_config)?;
    Ok(builder)
}

fn apply_file_config(mut builder: ConfigBuilder, config: FileConfig) -> Result<ConfigBuilder> {
    if let Some(bench) = config.benchmark {
        if let Some(start) = bench.start {
            builder = builder.start(start);
        }
        if let Some(end) = bench.end {
            builder = builder.end(end);
        }
        if let Some(step) = bench.step {
            builder = builder.step(step);
        }
        if bench.seed.is_some() {
            builder = builder.seed(bench.seed);
        }
    }

    if let Some(exec) = config.execution {
        if let Some(bytes) = exec.stack_size {
            builder = builder.stack_size(bytes);
        }
        if let Some(digits) = exec.max_input_digits {
            builder = builder.max_input_digits(digits);
        }
    }

    if let Some(output) = config.output
        && let Some(format) = output.format
    {
        builder = builder.format(format.parse::<OutputFormat>()?);
    }

    if let Some(logging) = config.logging {
        if let Some(level) = logging.level {
            builder = builder.log_level(level);
        }
        if let Some(json) = logging.json {
            builder = builder.json_logs(json);
        }
    }

    Ok(builder)
}

/// Root configuration file structure
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    benchmark: Option<BenchmarkFileConfig>,
    execution: Option<ExecutionFileConfig>,
    output: Option<OutputFileConfig>,
    logging: Option<LoggingFileConfig>,
}

#[derive(Debug, Deserialize)]
struct BenchmarkFileConfig {
    start: Option<usize>,
    end: Option<usize>,
    step: Option<usize>,
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ExecutionFileConfig {
    stack_size: Option<usize>,
    max_input_digits: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct OutputFileConfig {
    format: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoggingFileConfig {
    level: Option<String>,
    json: Option<bool>,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[benchmark]
start = 20
end = 1001
step = 100
seed = 1234

[execution]
stack_size = 33554432
max_input_digits = 2048

[output]
format = "csv"

[logging]
level = "debug"
json = true
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();
        let bench = config.benchmark.unwrap();
        assert_eq!(bench.start, Some(20));
        assert_eq!(bench.end, Some(1001));
        assert_eq!(bench.step, Some(100));
        assert_eq!(bench.seed, Some(1234));
        let exec = config.execution.unwrap();
        assert_eq!(exec.stack_size, Some(33_554_432));
        assert_eq!(config.output.unwrap().format.as_deref(), Some("csv"));
        assert_eq!(config.logging.unwrap().json, Some(true));
    }

    #[test]
    fn test_load_from_file_success() {
        let toml_content = r#"
[benchmark]
start = 20
end = 1001
step = 100
seed = 9

[output]
format = "json"
"#;
        let temp_file = create_temp_config(toml_content);

        let config = load_from_file(temp_file.path(), ConfigBuilder::new())
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.schedule.start.get(), 20);
        assert_eq!(config.schedule.end, 1001);
        assert_eq!(config.schedule.step.get(), 100);
        assert_eq!(config.schedule.sizes().len(), 10);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_execution_and_logging() {
        let toml_content = r#"
[execution]
stack_size = 33554432
max_input_digits = 500

[logging]
level = "trace"
json = true
"#;
        let temp_file = create_temp_config(toml_content);

        let config = load_from_file(temp_file.path(), ConfigBuilder::new())
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.execution.stack_size.get(), 33_554_432);
        assert_eq!(config.execution.max_input_digits.get(), 500);
        assert_eq!(config.telemetry.log_level, "trace");
        assert!(config.telemetry.json_logs);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(
            Path::new("/nonexistent/path/config.toml"),
            ConfigBuilder::new(),
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let temp_file = create_temp_config("this is not valid toml {{{{");

        let err = load_from_file(temp_file.path(), ConfigBuilder::new()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let temp_file = create_temp_config("[plotting]\nmarker = \"o\"\n");

        let err = load_from_file(temp_file.path(), ConfigBuilder::new()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let temp_file = create_temp_config("[output]\nformat = \"png\"\n");

        let err = load_from_file(temp_file.path(), ConfigBuilder::new()).unwrap_err();
        assert!(err.to_string().contains("png"));
    }

    #[test]
    fn test_zero_step_fails_on_build() {
        let temp_file = create_temp_config("[benchmark]\nstep = 0\n");

        let builder = load_from_file(temp_file.path(), ConfigBuilder::new()).unwrap();
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_empty_config_file() {
        let temp_file = create_temp_config("");

        let config = load_from_file(temp_file.path(), ConfigBuilder::new())
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.schedule.sizes().len(), 100);
    }

    #[test]
    fn test_find_config_file_not_found() {
        let result = find_config_file();
        assert!(result.is_none() || result.unwrap().exists());
    }
}

//! Environment variable loading for configuration

use std::env;
use std::str::FromStr;

use super::builder::{ConfigBuilder, OutputFormat};
use crate::Result;

/// Environment variable names
mod vars {
    pub const BINDEC_START: &str = "BINDEC_START";
    pub const BINDEC_END: &str = "BINDEC_END";
    pub const BINDEC_STEP: &str = "BINDEC_STEP";
    pub const BINDEC_SEED: &str = "BINDEC_SEED";
    pub const BINDEC_STACK_SIZE: &str = "BINDEC_STACK_SIZE";
    pub const BINDEC_MAX_DIGITS: &str = "BINDEC_MAX_DIGITS";
    pub const BINDEC_FORMAT: &str = "BINDEC_FORMAT";
    pub const RUST_LOG: &str = "RUST_LOG";
    pub const BINDEC_JSON_LOGS: &str = "BINDEC_JSON_LOGS";
}

/// Load configuration from environment variables
pub fn load_from_env(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(start) = parse_var::<usize>(vars::BINDEC_START) {
        builder = builder.start(start);
    }

    if let Some(end) = parse_var::<usize>(vars::BINDEC_END) {
        builder = builder.end(end);
    }

    if let Some(step) = parse_var::<usize>(vars::BINDEC_STEP) {
        builder = builder.step(step);
    }

    if let Some(seed) = parse_var::<u64>(vars::BINDEC_SEED) {
        builder = builder.seed(Some(seed));
    }

    if let Some(bytes) = parse_var::<usize>(vars::BINDEC_STACK_SIZE) {
        builder = builder.stack_size(bytes);
    }

    if let Some(digits) = parse_var::<usize>(vars::BINDEC_MAX_DIGITS) {
        builder = builder.max_input_digits(digits);
    }

    if let Ok(format) = env::var(vars::BINDEC_FORMAT) {
        builder = builder.format(format.parse::<OutputFormat>()?);
    }

    if let Ok(level) = env::var(vars::RUST_LOG) {
        builder = builder.log_level(level);
    }

    if let Ok(val) = env::var(vars::BINDEC_JSON_LOGS) {
        builder = builder.json_logs(parse_bool(&val));
    }

    Ok(builder)
}

/// Read and parse a numeric variable, ignoring unparseable values.
fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {name}={raw}: not a valid number");
            None
        }
    }
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

#[cfg(test)]
const ALL_VARS: &[&str] = &[
    vars::BINDEC_START,
    vars::BINDEC_END,
    vars::BINDEC_STEP,
    vars::BINDEC_SEED,
    vars::BINDEC_STACK_SIZE,
    vars::BINDEC_MAX_DIGITS,
    vars::BINDEC_FORMAT,
    vars::RUST_LOG,
    vars::BINDEC_JSON_LOGS,
];

/// Run `f` with exactly `vars` set among the loader's variables.
#[cfg(test)]
pub(crate) fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = super::ENV_MUTEX.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

    let old_values: Vec<_> = ALL_VARS.iter().map(|k| (*k, env::var(k).ok())).collect();

    for key in ALL_VARS {
        // SAFETY: We hold a mutex lock to ensure no concurrent modifications
        unsafe { env::remove_var(key) };
    }
    for (key, value) in vars {
        // SAFETY: We hold a mutex lock to ensure no concurrent modifications
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    for (key, old_value) in old_values {
        match old_value {
            // SAFETY: We hold a mutex lock to ensure no concurrent modifications
            Some(v) => unsafe { env::set_var(key, v) },
            None => unsafe { env::remove_var(key) },
        }
    }

    result
}

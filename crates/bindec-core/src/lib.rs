//! Iterative and recursive binary-to-decimal conversion with a timing
//! benchmark harness.
//!
//! A *binary-digit number* is an integer whose base-10 digits are all `0`
//! or `1` (the integer `1101` standing for binary `1101`). This crate
//! converts such numbers to their decimal value two ways, times both, and
//! sweeps input sizes to compare running time against input size.
//!
//! # Features
//!
//! - Arbitrary-precision values via `num-bigint`
//! - Genuinely recursive converter made depth-safe by an enlarged-stack worker
//! - Monotonic, sub-microsecond timing harness
//! - Benchmark driver with progress observation
//!
//! # Example
//!
//! ```rust
//! use bindec_core::{BigUint, convert_iterative, convert_recursive, validate_binary_string};
//!
//! let n = validate_binary_string("1101").unwrap();
//! assert_eq!(convert_iterative(n.value()), BigUint::from(13u32));
//! assert_eq!(convert_recursive(n.value()), BigUint::from(13u32));
//! ```
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod benchmark;
pub mod convert;
pub mod demo;
pub mod digits;
pub mod error;
pub mod generator;
pub mod stack;
pub mod timing;

// Re-export main types for convenience
pub use benchmark::{BenchmarkDriver, BenchmarkSeries, Progress, SizeSchedule, run_benchmark};
pub use convert::{Algorithm, convert_iterative, convert_recursive};
pub use demo::{DemoOptions, DemoOutcome, faster_of, run_demo};
pub use digits::{
    BinaryDigitNumber, DEFAULT_MAX_INPUT_DIGITS, validate_binary_string,
    validate_binary_string_with_limit,
};
pub use error::{BinDecError, Result, ValidationError};
pub use generator::generate_random_binary;
pub use num_bigint::BigUint;
pub use stack::{DEFAULT_STACK_SIZE, RecursionStack, STACK_BYTES_PER_DIGIT};
pub use timing::{Timed, TimingSample, duration_ms, timed_call};

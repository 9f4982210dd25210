//! Interactive single-run demo.
//!
//! Validates one user-supplied binary string, runs both converters once
//! through the timing harness, and reports which one finished first.

use std::num::NonZeroUsize;

use num_bigint::BigUint;

use crate::convert::{Algorithm, convert_iterative, convert_recursive};
use crate::digits::{BinaryDigitNumber, DEFAULT_MAX_INPUT_DIGITS, validate_binary_string_with_limit};
use crate::error::Result;
use crate::stack::RecursionStack;
use crate::timing::{Timed, TimingSample, timed_call};

/// Knobs for a demo run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOptions {
    pub max_input_digits: NonZeroUsize,
    pub stack: RecursionStack,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            max_input_digits: NonZeroUsize::new(DEFAULT_MAX_INPUT_DIGITS)
                .unwrap_or(NonZeroUsize::MIN),
            stack: RecursionStack::default(),
        }
    }
}

/// Result of one demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOutcome {
    pub input: BinaryDigitNumber,
    pub iterative: Timed<BigUint>,
    pub recursive: Timed<BigUint>,
}

impl DemoOutcome {
    /// The faster algorithm. Iterative wins exact ties.
    #[must_use]
    pub fn faster(&self) -> Algorithm {
        faster_of(self.iterative.elapsed_ms(), self.recursive.elapsed_ms())
    }

    /// `|t_iterative - t_recursive|` in milliseconds.
    #[must_use]
    pub fn difference_ms(&self) -> f64 {
        (self.iterative.elapsed_ms() - self.recursive.elapsed_ms()).abs()
    }

    /// The shared decimal result.
    #[must_use]
    pub const fn decimal(&self) -> &BigUint {
        &self.iterative.value
    }

    /// Whether both converters agreed. Always true for a correct build.
    #[must_use]
    pub fn results_agree(&self) -> bool {
        self.iterative.value == self.recursive.value
    }

    /// Both measurements, iterative first.
    #[must_use]
    pub fn samples(&self) -> [TimingSample; 2] {
        [
            self.iterative.sample(Algorithm::Iterative),
            self.recursive.sample(Algorithm::Recursive),
        ]
    }

    /// Timing for one algorithm.
    #[must_use]
    pub const fn timing(&self, algorithm: Algorithm) -> &Timed<BigUint> {
        match algorithm {
            Algorithm::Iterative => &self.iterative,
            Algorithm::Recursive => &self.recursive,
        }
    }
}

/// Pick the faster algorithm from two timings. Iterative wins when its time
/// is not greater than the recursive one.
#[must_use]
pub fn faster_of(iterative_ms: f64, recursive_ms: f64) -> Algorithm {
    if iterative_ms <= recursive_ms {
        Algorithm::Iterative
    } else {
        Algorithm::Recursive
    }
}

/// Validate `input` and time both converters on it once.
pub fn run_demo(input: &str, options: &DemoOptions) -> Result<DemoOutcome> {
    let number = validate_binary_string_with_limit(input, options.max_input_digits.get())
        .inspect_err(|e| tracing::warn!("Rejected demo input: {e}"))?;
    options.stack.ensure_depth(number.digit_count())?;

    let (iterative, recursive) = options.stack.run(|| {
        let iterative = timed_call(|| convert_iterative(number.value()));
        let recursive = timed_call(|| convert_recursive(number.value()));
        (iterative, recursive)
    })?;

    let outcome = DemoOutcome {
        input: number,
        iterative,
        recursive,
    };
    debug_assert!(outcome.results_agree());

    tracing::info!(
        digits = outcome.input.digit_count(),
        faster = %outcome.faster(),
        difference_ms = outcome.difference_ms(),
        "Demo finished"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_demo_1101() {
        let outcome = run_demo("1101", &DemoOptions::default()).unwrap();
        assert_eq!(outcome.decimal(), &BigUint::from(13u32));
        assert!(outcome.results_agree());
        assert_eq!(outcome.input.digit_count(), 4);
        assert!(outcome.difference_ms() >= 0.0);
    }

    #[test]
    fn test_demo_zero() {
        let outcome = run_demo("0", &DemoOptions::default()).unwrap();
        assert_eq!(outcome.decimal(), &BigUint::from(0u32));
        assert_eq!(outcome.recursive.value, BigUint::from(0u32));
    }

    #[test]
    fn test_demo_rejects_empty() {
        let err = run_demo("", &DemoOptions::default()).unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::Empty));
    }

    #[test]
    fn test_demo_rejects_non_binary() {
        let err = run_demo("1021", &DemoOptions::default()).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::InvalidDigit { ch: '2', position: 2 })
        ));
    }

    #[test]
    fn test_demo_respects_digit_cap() {
        let options = DemoOptions {
            max_input_digits: NonZeroUsize::new(3).unwrap(),
            ..DemoOptions::default()
        };
        let err = run_demo("1111", &options).unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::TooLong { len: 4, max: 3 })
        ));
    }

    #[test]
    fn test_demo_large_input() {
        let input = "1".repeat(5000);
        let outcome = run_demo(&input, &DemoOptions::default()).unwrap();
        let expected = (BigUint::from(1u32) << 5000usize) - 1u32;
        assert_eq!(outcome.iterative.value, expected);
        assert_eq!(outcome.recursive.value, expected);
    }

    #[test]
    fn test_demo_small_stack_is_error() {
        let options = DemoOptions {
            max_input_digits: NonZeroUsize::new(10_000).unwrap(),
            stack: RecursionStack::new(NonZeroUsize::new(1024 * 1024).unwrap()),
        };
        let err = run_demo(&"1".repeat(10_000), &options).unwrap_err();
        assert!(err.is_stack_too_small());
        assert!(!err.is_validation());

        // Short inputs still fit
        let outcome = run_demo(&"1".repeat(200), &options).unwrap();
        assert!(outcome.results_agree());
    }

    #[test]
    fn test_faster_of_tie_goes_to_iterative() {
        assert_eq!(faster_of(0.5, 0.5), Algorithm::Iterative);
        assert_eq!(faster_of(0.4, 0.5), Algorithm::Iterative);
        assert_eq!(faster_of(0.6, 0.5), Algorithm::Recursive);
    }

    #[test]
    fn test_samples_tagged_in_order() {
        let outcome = run_demo("1011", &DemoOptions::default()).unwrap();
        let [iterative, recursive] = outcome.samples();
        assert_eq!(iterative.algorithm, Algorithm::Iterative);
        assert_eq!(recursive.algorithm, Algorithm::Recursive);
        assert!((iterative.elapsed_ms - outcome.iterative.elapsed_ms()).abs() < f64::EPSILON);
        assert!((recursive.elapsed_ms - outcome.recursive.elapsed_ms()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_timing_accessor() {
        let outcome = run_demo("10", &DemoOptions::default()).unwrap();
        assert_eq!(outcome.timing(Algorithm::Recursive).value, BigUint::from(2u32));
    }
}

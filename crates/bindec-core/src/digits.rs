//! Binary-digit numbers and input validation.
//!
//! A binary-digit number is a non-negative integer whose base-10 digits are
//! all `0` or `1`, e.g. the integer `1101` standing for binary `1101`.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::ValidationError;

/// Default cap on the number of digits accepted from user input.
pub const DEFAULT_MAX_INPUT_DIGITS: usize = 10_000;

/// An integer stored in base-10 whose digits are all `0` or `1`.
///
/// Only constructible through [`validate_binary_string`] or the generator,
/// so the digit invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryDigitNumber {
    value: BigUint,
    digits: usize,
}

impl BinaryDigitNumber {
    /// Build from a digit sequence known to contain only 0 and 1.
    ///
    /// Leading zeros collapse the same way integer parsing does, so `"0010"`
    /// becomes the two-digit number `10`.
    pub(crate) fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        let value = bits.into_iter().fold(BigUint::zero(), |acc, bit| {
            acc * 10u32 + u32::from(bit)
        });
        let digits = if value.is_zero() {
            1
        } else {
            value.to_str_radix(10).len()
        };
        Self { value, digits }
    }

    /// The underlying integer, base-10 digits all in {0, 1}.
    #[must_use]
    pub const fn value(&self) -> &BigUint {
        &self.value
    }

    /// Number of decimal digits (`0` counts as one digit).
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.digits
    }

    /// Leading digit, either 0 or 1.
    #[must_use]
    pub fn leading_digit(&self) -> u8 {
        u8::from(!self.value.is_zero())
    }

    #[must_use]
    pub fn into_value(self) -> BigUint {
        self.value
    }
}

impl fmt::Display for BinaryDigitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl AsRef<BigUint> for BinaryDigitNumber {
    fn as_ref(&self) -> &BigUint {
        &self.value
    }
}

/// Validate a user-supplied binary string with the default length cap.
pub fn validate_binary_string(s: &str) -> Result<BinaryDigitNumber, ValidationError> {
    validate_binary_string_with_limit(s, DEFAULT_MAX_INPUT_DIGITS)
}

/// Validate a user-supplied binary string.
///
/// Rejects empty input, any character outside `{'0', '1'}`, and inputs
/// longer than `max_digits`.
pub fn validate_binary_string_with_limit(
    s: &str,
    max_digits: usize,
) -> Result<BinaryDigitNumber, ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::Empty);
    }

    if let Some((position, ch)) = s.chars().enumerate().find(|(_, c)| !matches!(c, '0' | '1')) {
        return Err(ValidationError::InvalidDigit { ch, position });
    }

    let len = s.len();
    if len > max_digits {
        return Err(ValidationError::TooLong {
            len,
            max: max_digits,
        });
    }

    Ok(BinaryDigitNumber::from_bits(s.bytes().map(|b| b == b'1')))
}

//! Binary-digit to decimal converters.
//!
//! Both converters peel the least-significant base-10 digit off the input,
//! weight it by the matching power of two and sum the terms. They differ only
//! in control flow: [`convert_iterative`] loops, [`convert_recursive`] recurses
//! once per digit. For the same input they always return the same value.

mod iterative;
mod recursive;

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

pub use iterative::convert_iterative;
pub use recursive::convert_recursive;

use crate::digits::BinaryDigitNumber;

/// Which converter to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Iterative,
    Recursive,
}

impl Algorithm {
    /// Both algorithms in reporting order.
    pub const ALL: [Self; 2] = [Self::Iterative, Self::Recursive];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::Recursive => "recursive",
        }
    }

    /// Short description of the control flow used.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::Iterative => "while loop and modulo",
            Self::Recursive => "recursion and modulo",
        }
    }

    /// Run this algorithm on `n`.
    #[must_use]
    pub fn convert(self, n: &BinaryDigitNumber) -> BigUint {
        match self {
            Self::Iterative => convert_iterative(n.value()),
            Self::Recursive => convert_recursive(n.value()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iterative" | "iter" => Ok(Self::Iterative),
            "recursive" | "rec" => Ok(Self::Recursive),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}

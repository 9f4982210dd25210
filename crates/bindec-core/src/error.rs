//! Error hierarchy for bindec-core.
//!
//! Input problems are reported as [`ValidationError`], a plain enum the
//! presentation layer can match on. Everything the crate can fail with is
//! carried by [`BinDecError`], which follows the canonical error struct
//! pattern: the kind stays private and callers classify through `is_xxx()`.

use thiserror::Error;

/// Rejection reasons for user-supplied binary strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Nothing was entered.
    #[error("input is empty, enter a binary number first")]
    Empty,

    /// A character other than `0` or `1` was found.
    #[error("invalid character '{ch}' at position {position}, only 0 and 1 are allowed")]
    InvalidDigit { ch: char, position: usize },

    /// The input has more digits than the configured cap.
    #[error("input has {len} digits, maximum is {max}")]
    TooLong { len: usize, max: usize },
}

/// Root error type for bindec-core.
#[derive(Error, Debug)]
#[error("{kind}")]
pub struct BinDecError {
    kind: ErrorKind,
}

/// Internal error classification.
#[derive(Error, Debug)]
#[non_exhaustive]
pub(crate) enum ErrorKind {
    /// Input rejected before any conversion ran.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The enlarged-stack worker thread could not be started.
    #[error("executor error: {message}")]
    Executor { message: String },

    /// A benchmark size schedule that yields no sizes.
    #[error("invalid size schedule: {message}")]
    InvalidSchedule { message: String },

    /// The worker stack cannot hold one recursion level per digit.
    #[error("worker stack of {stack_size} bytes is too small for {digits}-digit recursion")]
    StackTooSmall { digits: usize, stack_size: usize },
}

impl BinDecError {
    /// Create error for a failed worker thread spawn.
    #[must_use]
    pub fn executor(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Executor {
                message: message.into(),
            },
        }
    }

    /// Create error for an empty or malformed size schedule.
    #[must_use]
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidSchedule {
                message: message.into(),
            },
        }
    }

    /// Create error for an input deeper than the worker stack allows.
    #[must_use]
    pub const fn stack_too_small(digits: usize, stack_size: usize) -> Self {
        Self {
            kind: ErrorKind::StackTooSmall { digits, stack_size },
        }
    }

    /// Returns true if the input was rejected.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation(_))
    }

    /// Returns true if the worker thread could not be started.
    #[must_use]
    pub const fn is_executor(&self) -> bool {
        matches!(self.kind, ErrorKind::Executor { .. })
    }

    /// Returns true if a size schedule was rejected.
    #[must_use]
    pub const fn is_invalid_schedule(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidSchedule { .. })
    }

    /// Returns true if the worker stack is too small for the input.
    #[must_use]
    pub const fn is_stack_too_small(&self) -> bool {
        matches!(self.kind, ErrorKind::StackTooSmall { .. })
    }

    /// The underlying validation error, if any.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match &self.kind {
            ErrorKind::Validation(err) => Some(err),
            ErrorKind::Executor { .. }
            | ErrorKind::InvalidSchedule { .. }
            | ErrorKind::StackTooSmall { .. } => None,
        }
    }
}

impl From<ValidationError> for BinDecError {
    fn from(err: ValidationError) -> Self {
        Self {
            kind: ErrorKind::Validation(err),
        }
    }
}

/// Result type alias for bindec-core operations.
pub type Result<T> = std::result::Result<T, BinDecError>;

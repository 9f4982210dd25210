//! Enlarged-stack executor for deep recursion.
//!
//! [`convert_recursive`](crate::convert_recursive) recurses once per digit.
//! Rather than bounding input size by whatever stack the caller happens to
//! run on, recursive work is moved onto one scoped worker thread whose stack
//! is sized up front. The caller blocks until the worker finishes.
//!
//! Each digit costs one frame, budgeted at [`STACK_BYTES_PER_DIGIT`]. Callers
//! check [`RecursionStack::ensure_depth`] before recursing so an undersized
//! stack is reported as an error instead of overflowing the worker.

use std::num::NonZeroUsize;
use std::panic;
use std::thread;

use crate::error::{BinDecError, Result};

/// Default worker stack: 64 MiB.
pub const DEFAULT_STACK_SIZE: NonZeroUsize = match NonZeroUsize::new(64 * 1024 * 1024) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// Stack budgeted per recursion level.
pub const STACK_BYTES_PER_DIGIT: usize = 4 * 1024;

/// Runs closures on a worker thread with a fixed, enlarged stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursionStack {
    size: NonZeroUsize,
}

impl RecursionStack {
    #[must_use]
    pub const fn new(size: NonZeroUsize) -> Self {
        Self { size }
    }

    /// Worker stack size in bytes.
    #[must_use]
    pub const fn size(&self) -> NonZeroUsize {
        self.size
    }

    /// Deepest recursion, in digits, this stack is sized for.
    #[must_use]
    pub const fn max_digits(&self) -> usize {
        self.size.get() / STACK_BYTES_PER_DIGIT
    }

    /// Smallest stack size in bytes that holds `digits` levels of recursion.
    #[must_use]
    pub const fn required_size(digits: usize) -> usize {
        digits.saturating_mul(STACK_BYTES_PER_DIGIT)
    }

    /// Fail unless `digits` levels of recursion fit on this stack.
    pub const fn ensure_depth(&self, digits: usize) -> Result<()> {
        if digits > self.max_digits() {
            return Err(BinDecError::stack_too_small(digits, self.size.get()));
        }
        Ok(())
    }

    /// Run `f` on the worker thread and return its result.
    ///
    /// A panic inside `f` is resumed on the calling thread.
    pub fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        thread::scope(|scope| {
            let handle = thread::Builder::new()
                .name("bindec-recursion".into())
                .stack_size(self.size.get())
                .spawn_scoped(scope, f)
                .map_err(|e| BinDecError::executor(format!("failed to spawn worker: {e}")))?;

            match handle.join() {
                Ok(value) => Ok(value),
                Err(payload) => panic::resume_unwind(payload),
            }
        })
    }
}

impl Default for RecursionStack {
    fn default() -> Self {
        Self::new(DEFAULT_STACK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;
    use crate::convert::{convert_iterative, convert_recursive};

    #[test]
    fn test_default_size() {
        assert_eq!(RecursionStack::default().size().get(), 64 * 1024 * 1024);
    }

    #[test]
    fn test_default_fits_input_cap() {
        let stack = RecursionStack::default();
        assert!(stack.max_digits() >= crate::DEFAULT_MAX_INPUT_DIGITS);
        assert!(stack.ensure_depth(crate::DEFAULT_MAX_INPUT_DIGITS).is_ok());
    }

    #[test]
    fn test_ensure_depth_rejects_small_stack() {
        let stack = RecursionStack::new(NonZeroUsize::new(1024 * 1024).unwrap());
        assert_eq!(stack.max_digits(), 256);
        assert!(stack.ensure_depth(256).is_ok());

        let err = stack.ensure_depth(10_000).unwrap_err();
        assert!(err.is_stack_too_small());
    }

    #[test]
    fn test_required_size() {
        assert_eq!(RecursionStack::required_size(256), 1024 * 1024);
        assert_eq!(RecursionStack::required_size(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_run_returns_value() {
        let stack = RecursionStack::default();
        let borrowed = vec![1, 2, 3];
        let sum = stack.run(|| borrowed.iter().sum::<i32>()).unwrap();
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_deep_recursion_completes() {
        let n: BigUint = "10".repeat(5000).parse().unwrap();
        let stack = RecursionStack::default();
        let recursive = stack.run(|| convert_recursive(&n)).unwrap();
        assert_eq!(recursive, convert_iterative(&n));
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_panic_is_propagated() {
        let stack = RecursionStack::default();
        let _ = stack.run(|| -> u32 { panic!("boom") });
    }
}

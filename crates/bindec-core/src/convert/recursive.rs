use num_bigint::BigUint;
use num_traits::Zero;

/// Convert a binary-digit number to its decimal value by recursing once per
/// digit.
///
/// Recursion depth equals the digit count of `n`. Inputs of a few thousand
/// digits need more stack than a default test thread provides; run them
/// through [`RecursionStack`](crate::RecursionStack).
#[must_use]
pub fn convert_recursive(n: &BigUint) -> BigUint {
    convert_from(n.clone(), 0)
}

fn convert_from(n: BigUint, power: usize) -> BigUint {
    if n.is_zero() {
        return BigUint::zero();
    }

    let digit = &n % 10u32;
    let rest = n / 10u32;
    (digit << power) + convert_from(rest, power + 1)
}

use num_bigint::BigUint;
use num_traits::Zero;

/// Convert a binary-digit number to its decimal value with a single loop.
///
/// Each pass takes `n mod 10`, adds `digit * 2^power` to the running total,
/// then drops that digit with `n / 10`. Digits outside {0, 1} are not
/// rejected here; validation happens before conversion.
#[must_use]
pub fn convert_iterative(n: &BigUint) -> BigUint {
    let mut n = n.clone();
    let mut decimal = BigUint::zero();
    let mut power = 0usize;

    while !n.is_zero() {
        let digit = &n % 10u32;
        decimal += digit << power;
        n /= 10u32;
        power += 1;
    }

    decimal
}

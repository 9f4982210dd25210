//! Random binary-digit numbers of a requested length, used as benchmark input.

use std::num::NonZeroUsize;

use rand::Rng;

use crate::digits::BinaryDigitNumber;

/// Generate a random binary-digit number with exactly `length` digits.
///
/// For `length == 1` the result is `0` or `1` with equal probability. For
/// longer numbers the first digit is fixed to `1` so no leading zero shortens
/// the value, and every other digit is an independent fair coin flip.
pub fn generate_random_binary<R: Rng + ?Sized>(length: NonZeroUsize, rng: &mut R) -> BinaryDigitNumber {
    if length.get() == 1 {
        return BinaryDigitNumber::from_bits([rng.gen_bool(0.5)]);
    }

    let tail: Vec<bool> = (1..length.get()).map(|_| rng.gen_bool(0.5)).collect();
    BinaryDigitNumber::from_bits(std::iter::once(true).chain(tail))
}

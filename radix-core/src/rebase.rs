//!
//! This module implements the digit-array base conversion at the core of the
//! workspace. A number is represented as a sequence of digits (most
//! significant first, each strictly less than its base) so values of any
//! length convert exactly, without ever passing through a native integer.
//!

use crate::errors::RadixError;

/// Convert a digit sequence from one base to another.
///
/// The input is interpreted as an unsigned integer in `src_base` and
/// re-expressed in `dst_base` by repeated long division: each round divides
/// the current digit sequence by `dst_base`, collecting the remainder as the
/// next least-significant output digit, until the quotient is exhausted.
/// The output carries no superfluous leading zero digits; a non-empty input
/// representing the value zero yields `[0]`.
///
/// `src_base` is not validated; a source base inconsistent with the input
/// digits is a caller error and produces meaningless output. An empty input
/// yields an empty output.
///
/// # Arguments:
/// - `source`: digit sequence, most-significant digit first
/// - `src_base`: base the input digits are expressed in
/// - `dst_base`: base to convert to, must be at least 2
///
/// # Returns:
/// - `Result<Vec<u64>, RadixError>`: the digit sequence in `dst_base`, or
///   `InvalidDestinationBase` when `dst_base < 2`
///
/// # Examples
/// ```
/// use radix_core::rebase;
///
/// let hex = rebase(&[255], 256, 16).unwrap();
/// assert_eq!(hex, vec![15, 15]);
/// ```
pub fn rebase(source: &[u64], src_base: u64, dst_base: u64) -> Result<Vec<u64>, RadixError> {
    if dst_base < 2 {
        return Err(RadixError::InvalidDestinationBase(dst_base));
    }

    let mut digits = source.to_vec();
    let mut result = Vec::new();

    while !digits.is_empty() {
        let (quotient, remainder) = divide_digits(&digits, src_base, dst_base);
        result.push(remainder);
        digits = quotient;
    }

    result.reverse();
    Ok(result)
}

/// One long-division round: divide a `src_base` digit sequence by `dst_base`,
/// returning the quotient digits (leading zeros suppressed) and the final
/// remainder. The accumulator is widened to u128 so no u64 digit/base
/// combination can overflow; quotient and remainder come from exact integer
/// division.
fn divide_digits(source: &[u64], src_base: u64, dst_base: u64) -> (Vec<u64>, u64) {
    let mut quotient = Vec::with_capacity(source.len());
    let mut remainder: u64 = 0;

    for &digit in source {
        let acc = digit as u128 + remainder as u128 * src_base as u128;
        let e = (acc / dst_base as u128) as u64;
        remainder = (acc % dst_base as u128) as u64;

        if !quotient.is_empty() || e != 0 {
            quotient.push(e);
        }
    }

    (quotient, remainder)
}

//! CNPJ check-digit algorithm.
//!
//! Each check digit is a weighted sum modulo 11 over the preceding digits.
//! The weight table is right-aligned against the end of the range, so the
//! digit just before the check digit is always weighted by 2:
//!
//! ```text
//! weights:  6 5 4 3 2 9 8 7 6 5 4 3 2
//! 1st DV:     1 1 4 4 4 7 7 7 0 0 0 1   -> 6
//! 2nd DV:   1 1 4 4 4 7 7 7 0 0 0 1 6   -> 1
//! ```

use std::ops::Range;

use crate::CnpjError;

/// Weights for the check-digit sum, aligned to the end of the range.
pub const WEIGHTS: [u8; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Computes the check digit over `digits[range]`.
///
/// Position `i` is weighted by `WEIGHTS[13 - range.end + i]`.
///
/// # Errors
///
/// Returns [`CnpjError::InvalidRange`] if the range is reversed, extends past
/// the digits, or ends beyond the 13-entry weight table.
pub fn check_digit(digits: &[u8], range: Range<usize>) -> Result<u8, CnpjError> {
    let Range { start, end } = range;
    if start > end || end > digits.len() || end > WEIGHTS.len() {
        return Err(CnpjError::InvalidRange {
            start,
            end,
            len: digits.len(),
        });
    }
    Ok(compute(digits, start, end))
}

/// Unchecked variant for ranges already known to be in bounds.
pub(crate) fn compute(digits: &[u8], start: usize, end: usize) -> u8 {
    let offset = WEIGHTS.len() - end;
    let sum: u32 = digits[start..end]
        .iter()
        .zip(&WEIGHTS[offset + start..])
        .map(|(&digit, &weight)| u32::from(digit) * u32::from(weight))
        .sum();

    match sum % 11 {
        rem if rem < 2 => 0,
        rem => (11 - rem) as u8,
    }
}

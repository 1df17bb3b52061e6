//! Coercion of arbitrary numbers into single decimal digits.

use crate::macros::impl_to_digit;

/// A value that can be reduced to a single decimal digit.
///
/// The value is truncated toward zero and reduced modulo 10 into `0..=9`.
/// Values with no integer part to speak of (NaN, infinities) return `None`
/// and are skipped by [`Cnpj::new`](crate::Cnpj::new).
pub trait ToDigit {
    /// Reduces the value to a digit, or `None` if it is not a finite number.
    fn to_digit(self) -> Option<u8>;
}

impl_to_digit!(unsigned: u8, u16, u32, u64, u128, usize);
impl_to_digit!(signed: i8, i16, i32, i64, i128, isize);
impl_to_digit!(float: f32, f64);

impl<T: ToDigit + Copy> ToDigit for &T {
    #[inline]
    fn to_digit(self) -> Option<u8> {
        (*self).to_digit()
    }
}

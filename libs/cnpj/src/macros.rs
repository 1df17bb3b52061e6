//! Macros for implementing digit coercion on primitive numbers.

/// Implements [`ToDigit`](crate::ToDigit) for primitive number types.
///
/// Three flavours are generated:
/// - `unsigned`: plain remainder by 10
/// - `signed`: Euclidean remainder, so negative values land in `0..=9`
/// - `float`: truncation toward zero first; NaN and infinities yield `None`
///
/// # Example
///
/// ```ignore
/// impl_to_digit!(unsigned: u8, u16);
/// impl_to_digit!(signed: i8, i16);
/// impl_to_digit!(float: f32, f64);
/// ```
macro_rules! impl_to_digit {
    (unsigned: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ToDigit for $ty {
                #[inline]
                fn to_digit(self) -> Option<u8> {
                    u8::try_from(self % 10).ok()
                }
            }
        )+
    };
    (signed: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ToDigit for $ty {
                #[inline]
                fn to_digit(self) -> Option<u8> {
                    u8::try_from(self.rem_euclid(10)).ok()
                }
            }
        )+
    };
    (float: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ToDigit for $ty {
                #[inline]
                fn to_digit(self) -> Option<u8> {
                    if !self.is_finite() {
                        return None;
                    }
                    Some(self.trunc().rem_euclid(10.0) as u8)
                }
            }
        )+
    };
}

pub(crate) use impl_to_digit;

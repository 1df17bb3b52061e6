//! Validity classification of a digit sequence.

use serde::Serialize;

use crate::checksum;

/// Why a CNPJ is or isn't valid.
///
/// The flags are independent in representation but, given the length
/// guards, at most one of them is ever set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validity {
    /// No digits at all.
    pub value_missing: bool,

    /// Between 1 and 13 digits.
    pub too_short: bool,

    /// Fourteen digits, but a repdigit or a check digit mismatch.
    pub type_mismatch: bool,
}

impl Validity {
    /// Classifies a digit sequence.
    pub(crate) fn classify(digits: &[u8]) -> Self {
        let len = digits.len();

        let type_mismatch = len == 14
            && (is_repdigit(digits)
                || checksum::compute(digits, 0, 12) != digits[12]
                || checksum::compute(digits, 0, 13) != digits[13]);

        Self {
            value_missing: len == 0,
            too_short: (1..14).contains(&len),
            type_mismatch,
        }
    }

    /// Returns true if no flag is set.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !(self.value_missing || self.too_short || self.type_mismatch)
    }
}

/// Returns true if every digit equals the first one.
pub(crate) fn is_repdigit(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [u8; 14] = [1, 1, 4, 4, 4, 7, 7, 7, 0, 0, 0, 1, 6, 1];
    const INVALID: [u8; 14] = [1, 1, 4, 4, 4, 7, 7, 7, 0, 0, 0, 1, 7, 2];

    #[test]
    fn test_empty_is_value_missing() {
        let validity = Validity::classify(&[]);
        assert!(validity.value_missing);
        assert!(!validity.too_short);
        assert!(!validity.type_mismatch);
        assert!(!validity.is_valid());
    }

    #[test]
    fn test_partial_is_too_short() {
        for len in 1..14 {
            let validity = Validity::classify(&VALID[..len]);
            assert!(validity.too_short, "len {len}");
            assert!(!validity.value_missing);
            assert!(!validity.type_mismatch);
        }
    }

    #[test]
    fn test_wrong_check_digits_mismatch() {
        let validity = Validity::classify(&INVALID);
        assert!(validity.type_mismatch);
        assert!(!validity.is_valid());
    }

    #[test]
    fn test_only_second_check_digit_wrong() {
        let mut digits = VALID;
        digits[13] = 2;
        assert!(Validity::classify(&digits).type_mismatch);
    }

    #[test]
    fn test_valid_has_no_flags() {
        let validity = Validity::classify(&VALID);
        assert_eq!(validity, Validity::default());
        assert!(validity.is_valid());
    }

    #[test]
    fn test_repdigits_always_mismatch() {
        for digit in 0..10 {
            assert!(Validity::classify(&[digit; 14]).type_mismatch, "digit {digit}");
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Validity::classify(&VALID[..5])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "valueMissing": false,
                "tooShort": true,
                "typeMismatch": false,
            })
        );
    }
}

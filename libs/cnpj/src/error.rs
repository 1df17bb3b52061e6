//! Error types for CNPJ access and derivation.

use thiserror::Error;

/// Errors that can occur when accessing or deriving CNPJ digits.
///
/// Construction and parsing never fail; only positional access and the
/// ranged check-digit helper do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CnpjError {
    /// The index falls outside the digit sequence after negative-index
    /// normalization.
    #[error("index {index} out of range for CNPJ with {len} digits")]
    IndexOutOfRange { index: isize, len: usize },

    /// The replacement value cannot be reduced to a digit (NaN or infinite).
    #[error("value is not a finite number")]
    InvalidDigit,

    /// The check-digit range is not within the digits or the weight table.
    #[error("invalid check digit range {start}..{end} over {len} digits")]
    InvalidRange { start: usize, end: usize, len: usize },
}

impl CnpjError {
    /// Returns true if this error indicates an out-of-range index.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, CnpjError::IndexOutOfRange { .. })
    }
}

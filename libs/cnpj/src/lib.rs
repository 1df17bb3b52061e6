//! # cnpj
//!
//! An immutable value type for the CNPJ (Cadastro Nacional da Pessoa
//! Jurídica), the 14-digit Brazilian business registry number.
//!
//! ## Design Principles
//!
//! - Values are immutable; "changing" a digit yields a new value
//! - Construction never fails: noisy input is normalized, incomplete input
//!   is kept and classified by [`Validity`] instead of rejected
//! - Equal digit sequences are equal values with equal hash codes
//! - The empty value is the single [`Cnpj::NIL`] constant
//!
//! ## Format
//!
//! Canonical form is the bare digit string; display form is
//! `##.###.###/####-##`:
//!
//! - `11444777000161`
//! - `11.444.777/0001-61`
//!
//! The last two digits are check digits computed by [`check_digit`].

mod checksum;
mod cnpj;
mod digit;
mod error;
pub mod evaluable;
pub mod hash;
mod macros;
mod validity;

pub use checksum::{check_digit, WEIGHTS};
pub use cnpj::Cnpj;
pub use digit::ToDigit;
pub use error::CnpjError;
pub use evaluable::Evaluable;
pub use validity::Validity;

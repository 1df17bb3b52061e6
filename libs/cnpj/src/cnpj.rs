//! The CNPJ value type.

use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use rand::Rng;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};
use unicode_normalization::UnicodeNormalization;

use crate::validity::{self, Validity};
use crate::{checksum, hash, CnpjError, Evaluable, ToDigit};

/// Number of digits in a complete CNPJ.
const MAX_DIGITS: usize = 14;

/// Digit groups after the first: (minimum length to continue, separator,
/// start, end).
const LAYOUT: [(usize, char, usize, usize); 4] = [
    (2, '.', 2, 5),
    (5, '.', 5, 8),
    (8, '/', 8, 12),
    (13, '-', 12, 14),
];

static SEED: LazyLock<u32> = LazyLock::new(|| hash::seed_for(Cnpj::TYPE_NAME));

/// An immutable CNPJ, the 14-digit Brazilian business registry number.
///
/// Holds up to 14 digits. Incomplete and checksum-invalid values are
/// representable; [`Cnpj::validity`] says what is wrong with them.
///
/// # Example
///
/// ```
/// use cnpj::Cnpj;
///
/// let cnpj = Cnpj::parse("11.444.777/0001-61");
/// assert!(cnpj.check_validity());
/// assert_eq!(cnpj.canonical(), "11444777000161");
/// assert_eq!(cnpj.to_string(), "[CNPJ: 11.444.777/0001-61]");
/// ```
#[derive(Clone, Copy)]
pub struct Cnpj {
    digits: [u8; MAX_DIGITS],
    len: u8,
    hash: u32,
}

impl Cnpj {
    /// Name used in the display form and for the hash seed.
    pub const TYPE_NAME: &'static str = "CNPJ";

    /// Maximum number of digits kept.
    pub const MAX_DIGITS: usize = MAX_DIGITS;

    /// The empty CNPJ.
    pub const NIL: Self = Self {
        digits: [0; MAX_DIGITS],
        len: 0,
        hash: 0,
    };

    /// Creates a CNPJ from a sequence of numbers.
    ///
    /// Each value is truncated toward zero and reduced modulo 10. Non-finite
    /// floats are skipped. At most 14 digits are taken and the source is not
    /// advanced past the 14th.
    ///
    /// ```
    /// use cnpj::Cnpj;
    ///
    /// let a = Cnpj::new([1.5, 11.0, 4.0, f64::NAN, -6.0]);
    /// assert_eq!(a.to_vec(), vec![1, 1, 4, 4]);
    /// assert_eq!(Cnpj::new(Vec::<u8>::new()), Cnpj::NIL);
    /// ```
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToDigit,
    {
        let mut digits = [0; MAX_DIGITS];
        let mut len = 0;

        for digit in values
            .into_iter()
            .filter_map(ToDigit::to_digit)
            .take(MAX_DIGITS)
        {
            digits[len] = digit;
            len += 1;
        }

        Self::from_parts(digits, len)
    }

    /// Parses a CNPJ from a string, formatted or not.
    ///
    /// The input is NFD-normalized and every character that is not an ASCII
    /// digit is dropped. Strings without digits give [`Cnpj::NIL`]; strings
    /// with fewer than 14 give an incomplete CNPJ.
    pub fn parse(input: &str) -> Self {
        let cnpj = Self::new(
            input
                .nfd()
                .filter(char::is_ascii_digit)
                .map(|c| c as u8 - b'0'),
        );
        trace!(input_len = input.len(), digits = cnpj.len(), "parsed CNPJ");
        cnpj
    }

    /// Creates a random, valid CNPJ using the thread-local generator.
    pub fn create() -> Self {
        Self::create_with(&mut rand::rng())
    }

    /// Creates a random, valid CNPJ using the given generator.
    ///
    /// Twelve digits are drawn uniformly and the two check digits appended.
    pub fn create_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let mut digits = [0; MAX_DIGITS];
            for digit in &mut digits[..12] {
                *digit = rng.random_range(0..10);
            }
            digits[12] = checksum::compute(&digits, 0, 12);
            digits[13] = checksum::compute(&digits, 0, 13);

            if !validity::is_repdigit(&digits) {
                return Self::from_parts(digits, MAX_DIGITS);
            }
            debug!("generated repdigit CNPJ, drawing again");
        }
    }

    /// Returns a CNPJ with the digit at `index` replaced.
    ///
    /// Negative indices count from the end. The value is coerced like in
    /// [`Cnpj::new`]. If the digit does not change, `self` is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`CnpjError::IndexOutOfRange`] if the index is outside the
    /// digits, or [`CnpjError::InvalidDigit`] for a non-finite value.
    pub fn with(self, index: isize, digit: impl ToDigit) -> Result<Self, CnpjError> {
        let position = self.position(index)?;
        let digit = digit.to_digit().ok_or(CnpjError::InvalidDigit)?;

        if self.digits[position] == digit {
            return Ok(self);
        }

        let mut digits = self.digits;
        digits[position] = digit;
        trace!(position, digit, "replaced CNPJ digit");

        Ok(Self::from_parts(digits, self.len()))
    }

    /// Returns the digit at `index`. Negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`CnpjError::IndexOutOfRange`] if the index is outside the
    /// digits.
    pub fn at(&self, index: isize) -> Result<u8, CnpjError> {
        self.position(index).map(|position| self.digits[position])
    }

    /// Number of digits.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns true for the empty CNPJ.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The digits as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits[..self.len()]
    }

    /// An owned copy of the digits.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Iterates over the digits in order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u8>> {
        self.as_slice().iter().copied()
    }

    /// Hash code derived from the digits and the type seed.
    ///
    /// Equal CNPJs always have equal hash codes; [`Cnpj::NIL`] hashes to 0.
    #[must_use]
    pub const fn hash_code(&self) -> u32 {
        self.hash
    }

    /// Classifies the digits.
    #[must_use]
    pub fn validity(&self) -> Validity {
        Validity::classify(self.as_slice())
    }

    /// Returns true for 14 digits that are not all equal and whose check
    /// digits match.
    #[must_use]
    pub fn check_validity(&self) -> bool {
        self.validity().is_valid()
    }

    /// Formats as `##.###.###/####-##`.
    ///
    /// Incomplete CNPJs give a prefix of that pattern; a separator is
    /// written once the group before it could be complete:
    ///
    /// ```
    /// use cnpj::Cnpj;
    ///
    /// assert_eq!(Cnpj::new([1, 1, 4, 4, 4]).format(), "11.444.");
    /// assert_eq!(Cnpj::NIL.format(), "");
    /// ```
    #[must_use]
    pub fn format(&self) -> String {
        let digits = self.as_slice();
        let len = digits.len();
        let mut out = String::with_capacity(18);

        push_digits(&mut out, &digits[..len.min(2)]);
        for (min_len, separator, start, end) in LAYOUT {
            if len < min_len {
                break;
            }
            out.push(separator);
            push_digits(&mut out, &digits[start.min(len)..end.min(len)]);
        }

        out
    }

    /// The digits as a string without separators.
    #[must_use]
    pub fn canonical(&self) -> String {
        let mut out = String::with_capacity(self.len());
        push_digits(&mut out, self.as_slice());
        out
    }

    fn from_parts(digits: [u8; MAX_DIGITS], len: usize) -> Self {
        if len == 0 {
            return Self::NIL;
        }

        let hash = hash::hash_sequence(digits[..len].iter().map(|&d| u32::from(d)), *SEED);
        Self {
            digits,
            len: len as u8,
            hash,
        }
    }

    fn position(&self, index: isize) -> Result<usize, CnpjError> {
        let len = self.len();
        let normalized = if index < 0 {
            index.checked_add(len as isize)
        } else {
            Some(index)
        };

        match normalized {
            Some(position) if (0..len as isize).contains(&position) => Ok(position as usize),
            _ => Err(CnpjError::IndexOutOfRange { index, len }),
        }
    }
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|&d| char::from(b'0' + d)));
}

impl Default for Cnpj {
    fn default() -> Self {
        Self::NIL
    }
}

impl PartialEq for Cnpj {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.hash == other.hash && self.as_slice() == other.as_slice()
    }
}

impl Eq for Cnpj {}

impl PartialOrd for Cnpj {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cnpj {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl Hash for Cnpj {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl Evaluable for Cnpj {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_code(&self) -> u32 {
        self.hash
    }
}

impl fmt::Debug for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cnpj").field(&self.canonical()).finish()
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}]", Self::TYPE_NAME, self.format())
    }
}

impl FromStr for Cnpj {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Cnpj {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Cnpj {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl<T: ToDigit> FromIterator<T> for Cnpj {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl AsRef<[u8]> for Cnpj {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Cnpj {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Cnpj {
    type Item = u8;
    type IntoIter = std::iter::Take<std::array::IntoIter<u8, MAX_DIGITS>>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.into_iter().take(self.len())
    }
}

impl Serialize for Cnpj {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.canonical())
    }
}

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(CnpjVisitor)
        } else {
            deserializer.deserialize_str(CnpjVisitor)
        }
    }
}

/// One element of a digit sequence, kept exact so that integers beyond
/// `f64` precision still reduce to the right digit.
#[derive(Deserialize)]
#[serde(untagged)]
enum Element {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl ToDigit for Element {
    fn to_digit(self) -> Option<u8> {
        match self {
            Element::Unsigned(value) => value.to_digit(),
            Element::Signed(value) => value.to_digit(),
            Element::Float(value) => value.to_digit(),
        }
    }
}

/// Accepts the canonical string form, or any formatted string, or a
/// sequence of numbers.
struct CnpjVisitor;

impl<'de> Visitor<'de> for CnpjVisitor {
    type Value = Cnpj;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a CNPJ string or a sequence of digits")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Cnpj, E> {
        Ok(Cnpj::parse(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Cnpj, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut digits = Vec::with_capacity(MAX_DIGITS);
        while digits.len() < MAX_DIGITS {
            match seq.next_element::<Element>()? {
                Some(element) => digits.extend(element.to_digit()),
                None => return Ok(Cnpj::new(digits)),
            }
        }

        // Anything past the fourteenth digit is read and discarded.
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(Cnpj::new(digits))
    }
}

//! String parsing and formatting cases.

use cnpj::{Cnpj, Validity};
use rstest::rstest;

const SEMI: [u8; 5] = [1, 1, 4, 4, 4];
const INVALID: [u8; 14] = [1, 1, 4, 4, 4, 7, 7, 7, 0, 0, 0, 1, 7, 2];
const VALID: [u8; 14] = [1, 1, 4, 4, 4, 7, 7, 7, 0, 0, 0, 1, 6, 1];

#[rstest]
#[case("")]
#[case("aaa")]
#[case("a long string")]
#[case("\u{2014}")]
#[case("./-")]
fn test_no_digits_is_nil(#[case] input: &str) {
    let cnpj = Cnpj::parse(input);
    assert_eq!(cnpj, Cnpj::NIL);
    assert!(cnpj.validity().value_missing);
}

#[rstest]
#[case("11444")]
#[case("1, 1, 4, 4, 4")]
#[case("11 ab44\u{2014} 4")]
#[case("11.444.")]
fn test_some_digits_is_incomplete(#[case] input: &str) {
    let cnpj = Cnpj::parse(input);
    assert_eq!(cnpj, Cnpj::new(SEMI));
    assert!(cnpj.validity().too_short);
}

#[rstest]
#[case("11444777000172")]
#[case("11444777000172001")]
#[case("11.444.777/0001-72")]
#[case("11 444 777\u{2014}000172")]
#[case("11 444 777\u{2014}000172001")]
fn test_invalid_digits(#[case] input: &str) {
    let cnpj = Cnpj::parse(input);
    assert_eq!(cnpj, Cnpj::new(INVALID));
    assert!(cnpj.validity().type_mismatch);
}

#[rstest]
#[case("11444777000161")]
#[case("11444777000161001")]
#[case("11.444.777/0001-61")]
#[case("11 444 777\u{2014}000161")]
#[case("11 444 777\u{2014}000161001")]
#[case("CNPJ nº 11.444.777/0001-61")]
fn test_valid_digits(#[case] input: &str) {
    let cnpj = Cnpj::parse(input);
    assert_eq!(cnpj, Cnpj::new(VALID));
    assert_eq!(cnpj.validity(), Validity::default());
}

#[rstest]
// Fullwidth and Arabic-Indic digits are not ASCII and are dropped
#[case("\u{FF11}\u{FF11}444", "444")]
#[case("\u{0661}1444", "1444")]
// Decomposable letters carry no digits
#[case("é1ç1", "11")]
fn test_only_ascii_digits_count(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(Cnpj::parse(input).canonical(), expected);
}

#[rstest]
#[case(&[], "")]
#[case(&[1], "1")]
#[case(&[1, 1], "11.")]
#[case(&[1, 1, 4, 4, 4], "11.444.")]
#[case(&[1, 1, 4, 4, 4, 7, 7, 7], "11.444.777/")]
#[case(&[1, 1, 4, 4, 4, 7, 7, 7, 0, 0, 0, 1], "11.444.777/0001")]
#[case(&INVALID, "11.444.777/0001-72")]
#[case(&VALID, "11.444.777/0001-61")]
fn test_format(#[case] digits: &[u8], #[case] expected: &str) {
    assert_eq!(Cnpj::new(digits).format(), expected);
}

#[rstest]
#[case("11.444.777/0001-61")]
#[case("11.444.")]
#[case("")]
fn test_formatted_output_parses_back(#[case] formatted: &str) {
    let cnpj = Cnpj::parse(formatted);
    assert_eq!(cnpj.format(), formatted);
    assert_eq!(Cnpj::parse(&cnpj.format()), cnpj);
}

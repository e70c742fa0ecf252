//! Lexeme classification for paramprog source text.
//!
//! Source is split on whitespace only. Each word is classified by shape,
//! independent of context; the parser decides what a shape means depending
//! on whether an argument list is open.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Millimeter literals are stored as integers in this unit (nanometers).
pub const UNITS_PER_MM: i64 = 1_000_000;

/// The shape of a single whitespace-separated word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lexeme<'a> {
    /// One of `+ - * /`, optionally followed by lowercase letters.
    Operator(&'a str),
    /// Optional sign followed by decimal digits.
    Integer(&'a str),
    /// Decimal number with an `mm` suffix; holds the text without the suffix.
    Millimeters(&'a str),
    /// Canonical lowercase UUID.
    Uuid(&'a str),
    /// `[a-z][a-z0-9_-]*`
    Identifier(&'a str),
    OpenBracket,
    CloseBracket,
    Unrecognized,
}

/// Split source text into words.
pub(crate) fn words(source: &str) -> impl Iterator<Item = &str> {
    source.split_whitespace()
}

/// Classify a word. The order of checks is significant: a word that fits
/// several shapes takes the first one.
pub(crate) fn classify(word: &str) -> Lexeme<'_> {
    if is_operator(word) {
        Lexeme::Operator(word)
    } else if is_integer(word) {
        Lexeme::Integer(word)
    } else if let Some(number) = millimeter_number(word) {
        Lexeme::Millimeters(number)
    } else if is_uuid(word) {
        Lexeme::Uuid(word)
    } else if is_identifier(word) {
        Lexeme::Identifier(word)
    } else if word == "[" {
        Lexeme::OpenBracket
    } else if word == "]" {
        Lexeme::CloseBracket
    } else {
        Lexeme::Unrecognized
    }
}

fn is_operator(word: &str) -> bool {
    let bytes = word.as_bytes();
    matches!(bytes.first(), Some(b'+' | b'-' | b'*' | b'/'))
        && bytes[1..].iter().all(u8::is_ascii_lowercase)
}

fn strip_sign(word: &str) -> &str {
    word.strip_prefix(['+', '-']).unwrap_or(word)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_integer(word: &str) -> bool {
    all_digits(strip_sign(word))
}

/// If `word` is `[+-]?([0-9]*\.)?[0-9]+mm`, return it without the suffix.
fn millimeter_number(word: &str) -> Option<&str> {
    let number = word.strip_suffix("mm")?;
    let unsigned = strip_sign(number);
    let valid = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => {
            (int_part.is_empty() || all_digits(int_part)) && all_digits(frac_part)
        }
        None => all_digits(unsigned),
    };
    valid.then_some(number)
}

/// `[a-z][a-z0-9_-]*`
pub(crate) fn is_identifier(word: &str) -> bool {
    let bytes = word.as_bytes();
    match bytes.first() {
        Some(first) if first.is_ascii_lowercase() => bytes[1..]
            .iter()
            .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-'),
        _ => false,
    }
}

/// Lowercase 8-4-4-4-12 hex with version nibble 1-5 and variant nibble 8, 9, a or b.
fn is_uuid(word: &str) -> bool {
    let bytes = word.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    let hex = |b: u8| b.is_ascii_digit() || (b'a'..=b'f').contains(&b);
    bytes.iter().enumerate().all(|(i, &b)| match i {
        8 | 13 | 18 | 23 => b == b'-',
        14 => (b'1'..=b'5').contains(&b),
        19 => matches!(b, b'8' | b'9' | b'a' | b'b'),
        _ => hex(b),
    })
}

/// Convert the numeric part of a millimeter literal to nanometers,
/// rounding half away from zero. The arithmetic is exact decimal, so
/// every in-range literal scales without loss.
pub(crate) fn millimeters_to_units(number: &str) -> Option<i64> {
    let (negative, unsigned) = match number.as_bytes().first() {
        Some(b'-') => (true, &number[1..]),
        Some(b'+') => (false, &number[1..]),
        _ => (false, number),
    };
    let mut mm = if unsigned.starts_with('.') {
        Decimal::from_str(&format!("0{unsigned}")).ok()?
    } else {
        Decimal::from_str(unsigned).ok()?
    };
    if negative {
        mm.set_sign_negative(true);
    }
    mm.checked_mul(Decimal::from(UNITS_PER_MM))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_any_whitespace() {
        let w: Vec<_> = words("  1\t2\n dup  ").collect();
        assert_eq!(w, vec!["1", "2", "dup"]);
    }

    #[test]
    fn operators() {
        for w in ["+", "-", "*", "/", "+xy", "-xy", "*abc"] {
            assert_eq!(classify(w), Lexeme::Operator(w), "{w}");
        }
        assert_eq!(classify("+Xy"), Lexeme::Unrecognized);
        assert_eq!(classify(","), Lexeme::Unrecognized);
    }

    #[test]
    fn operator_shape_wins_over_identifier_suffix() {
        assert_eq!(classify("-mm"), Lexeme::Operator("-mm"));
    }

    #[test]
    fn integers() {
        for w in ["0", "42", "-7", "+7", "007"] {
            assert_eq!(classify(w), Lexeme::Integer(w), "{w}");
        }
        assert_eq!(classify("1-2"), Lexeme::Unrecognized);
    }

    #[test]
    fn millimeters() {
        assert_eq!(classify("1.5mm"), Lexeme::Millimeters("1.5"));
        assert_eq!(classify(".5mm"), Lexeme::Millimeters(".5"));
        assert_eq!(classify("-2mm"), Lexeme::Millimeters("-2"));
        assert_eq!(classify("+0.25mm"), Lexeme::Millimeters("+0.25"));
        assert_eq!(classify("1.mm"), Lexeme::Unrecognized);
        assert_eq!(classify("mm"), Lexeme::Identifier("mm"));
        assert_eq!(classify("1,5mm"), Lexeme::Unrecognized);
        assert_eq!(classify("1.5MM"), Lexeme::Unrecognized);
    }

    #[test]
    fn identifiers() {
        for w in ["dup", "get-parameter", "pad_width", "a1"] {
            assert_eq!(classify(w), Lexeme::Identifier(w), "{w}");
        }
        assert_eq!(classify("Dup"), Lexeme::Unrecognized);
        assert_eq!(classify("_x"), Lexeme::Unrecognized);
    }

    #[test]
    fn uuids() {
        let u = "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d";
        assert_eq!(classify(u), Lexeme::Uuid(u));
        assert!(is_identifier(u));

        let digit_first = "0d2a4a1c-2f1e-4b3c-9a8d-1234567890ab";
        assert_eq!(classify(digit_first), Lexeme::Uuid(digit_first));
        assert!(!is_identifier(digit_first));

        // Version nibble 6 and variant nibble c are outside the accepted set.
        assert!(!is_uuid("a1b2c3d4-e5f6-6a7b-8c9d-0e1f2a3b4c5d"));
        assert!(!is_uuid("a1b2c3d4-e5f6-4a7b-cc9d-0e1f2a3b4c5d"));
        assert!(!is_uuid("A1B2C3D4-E5F6-4A7B-8C9D-0E1F2A3B4C5D"));
    }

    #[test]
    fn brackets() {
        assert_eq!(classify("["), Lexeme::OpenBracket);
        assert_eq!(classify("]"), Lexeme::CloseBracket);
        assert_eq!(classify("[1"), Lexeme::Unrecognized);
    }

    #[test]
    fn millimeter_scaling() {
        assert_eq!(millimeters_to_units("1.5"), Some(1_500_000));
        assert_eq!(millimeters_to_units(".5"), Some(500_000));
        assert_eq!(millimeters_to_units("-0.1"), Some(-100_000));
        assert_eq!(millimeters_to_units("0.000001"), Some(1));
        assert_eq!(millimeters_to_units("-0.000001"), Some(-1));
        assert_eq!(millimeters_to_units("0.1"), Some(100_000));
        assert_eq!(millimeters_to_units("99999999999999999999"), None);
    }

    #[test]
    fn millimeter_scaling_is_exact() {
        // Neither value is representable as f64 after scaling.
        assert_eq!(
            millimeters_to_units("9007199254.740993"),
            Some(9_007_199_254_740_993)
        );
        assert_eq!(
            millimeters_to_units("-9223372036854.775808"),
            Some(i64::MIN)
        );
        assert_eq!(millimeters_to_units("9223372036854.775808"), None);
    }

    #[test]
    fn millimeter_halves_round_away_from_zero() {
        assert_eq!(millimeters_to_units("0.0000005"), Some(1));
        assert_eq!(millimeters_to_units("-0.0000005"), Some(-1));
        assert_eq!(millimeters_to_units("0.0000015"), Some(2));
        assert_eq!(millimeters_to_units("0.00000049"), Some(0));
        assert_eq!(millimeters_to_units("1.0000025"), Some(1_000_003));
    }
}

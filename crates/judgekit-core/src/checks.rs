//! Assertion helpers for checker code.
//!
//! Each helper returns its first argument on success and raises a verdict
//! otherwise, so checks chain naturally with `?`:
//!
//! ```
//! use judgekit_core::checks;
//! use judgekit_core::{Flow, OutcomeKind};
//!
//! fn check(found: i64) -> Flow<i64> {
//!     let value = checks::expect_in_range(found, 1, 100)?;
//!     checks::expect_divisible(value, 5)
//! }
//!
//! assert!(check(25).is_ok());
//! assert_eq!(check(7).unwrap_err().kind(), OutcomeKind::WrongAnswer);
//! ```

use std::fmt::Display;

use crate::outcome::{Flow, Outcome, OutcomeKind};

/// Strings in mismatch messages are cut to this many characters.
pub const STRING_PREVIEW_LEN: usize = 50;

/// Slack for real divisibility: the quotient may be this far from an integer.
const DIVISIBILITY_EPS: f64 = 1e-8;

/// Cut `text` to at most `max` characters, ending in `...` when shortened.
pub fn shrink(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut shrunk: String = text.chars().take(keep).collect();
    shrunk.push_str("...");
    shrunk
}

pub fn expect_eq<T: PartialEq + Display>(a: T, b: T) -> Flow<T> {
    if a != b {
        return Outcome::quit(
            OutcomeKind::WrongAnswer,
            format!("Numbers `{}` and `{}` are not equal", a, b),
        );
    }
    Ok(a)
}

/// Equality within an absolute `precision`.
pub fn expect_close(a: f64, b: f64, precision: f64) -> Flow<f64> {
    if (a - b).abs() > precision || a.is_nan() || b.is_nan() {
        return Outcome::quit(
            OutcomeKind::WrongAnswer,
            format!("Numbers `{}` and `{}` are not equal", a, b),
        );
    }
    Ok(a)
}

pub fn expect_str_eq<'a>(a: &'a str, b: &str) -> Flow<&'a str> {
    if a != b {
        return Outcome::quit(
            OutcomeKind::WrongAnswer,
            format!(
                "Strings `{}` and `{}` are not equal",
                shrink(a, STRING_PREVIEW_LEN),
                shrink(b, STRING_PREVIEW_LEN)
            ),
        );
    }
    Ok(a)
}

/// `min <= a <= max`.
pub fn expect_in_range<T: PartialOrd + Display>(a: T, min: T, max: T) -> Flow<T> {
    if a < min || a > max {
        return Outcome::quit(
            OutcomeKind::WrongAnswer,
            format!("Number `{}` is out of range [{}; {}]", a, min, max),
        );
    }
    Ok(a)
}

pub fn expect_divisible(a: i64, divider: i64) -> Flow<i64> {
    if divider == 0 {
        return Outcome::quit(OutcomeKind::WrongAnswer, format!("Divider `{}` is 0", divider));
    }
    if a.wrapping_rem(divider) != 0 {
        return Outcome::quit(
            OutcomeKind::WrongAnswer,
            format!("Number `{}` is not divisible by `{}`", a, divider),
        );
    }
    Ok(a)
}

pub fn expect_divisible_real(a: f64, divider: f64) -> Flow<f64> {
    if divider == 0.0 {
        return Outcome::quit(
            OutcomeKind::WrongAnswer,
            format!("Divider `{}` is 0.0", divider),
        );
    }
    let quotient = a / divider;
    if (quotient.round() - quotient).abs() > DIVISIBILITY_EPS {
        return Outcome::quit(
            OutcomeKind::WrongAnswer,
            format!("Number `{}` is not divisible by `{}`", a, divider),
        );
    }
    Ok(a)
}

pub fn expect_finite(a: f64) -> Flow<f64> {
    if !a.is_finite() {
        return Outcome::quit(
            OutcomeKind::WrongAnswer,
            format!("Number `{}` is not a finite double value", a),
        );
    }
    Ok(a)
}

pub fn expect_finite_f32(a: f32) -> Flow<f32> {
    if !a.is_finite() {
        return Outcome::quit(
            OutcomeKind::WrongAnswer,
            format!("Number `{}` is not a finite float value", a),
        );
    }
    Ok(a)
}

/// Blank strings are a presentation error.
pub fn expect_non_empty(value: &str) -> Flow<&str> {
    if value.trim().is_empty() {
        return Outcome::quit(
            OutcomeKind::PresentationError,
            "Non-empty string was expected",
        );
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink() {
        assert_eq!(shrink("short", 50), "short");
        assert_eq!(shrink("abcdefghij", 8), "abcde...");
        assert_eq!(shrink("абвгдежзий", 6), "абв...");
        assert_eq!(shrink("abcdef", 2), "...");
    }

    #[test]
    fn test_expect_eq() {
        assert_eq!(expect_eq(3, 3).unwrap(), 3);
        let err = expect_eq(3_i64, 4).unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::WrongAnswer);
        assert_eq!(err.message(), "Numbers `3` and `4` are not equal");
    }

    #[test]
    fn test_expect_close() {
        assert!(expect_close(1.0, 1.0 + 1e-7, 1e-6).is_ok());
        assert!(expect_close(1.0, 1.1, 1e-6).is_err());
        assert!(expect_close(f64::NAN, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_expect_str_eq_shrinks_long_strings() {
        let long = "x".repeat(80);
        let err = expect_str_eq(&long, "y").unwrap_err();
        let shown = format!("{}...", "x".repeat(47));
        assert_eq!(
            err.message(),
            format!("Strings `{}` and `y` are not equal", shown)
        );
        assert_eq!(expect_str_eq("a", "a").unwrap(), "a");
    }

    #[test]
    fn test_expect_in_range() {
        assert!(expect_in_range(5, 1, 10).is_ok());
        assert!(expect_in_range(1, 1, 1).is_ok());
        let err = expect_in_range(11, 1, 10).unwrap_err();
        assert_eq!(err.message(), "Number `11` is out of range [1; 10]");
    }

    #[test]
    fn test_expect_divisible() {
        assert!(expect_divisible(12, 4).is_ok());
        assert_eq!(
            expect_divisible(13, 4).unwrap_err().message(),
            "Number `13` is not divisible by `4`"
        );
        assert_eq!(
            expect_divisible(13, 0).unwrap_err().message(),
            "Divider `0` is 0"
        );
    }

    #[test]
    fn test_expect_divisible_extreme_values() {
        assert_eq!(expect_divisible(i64::MIN, -1).unwrap(), i64::MIN);
        assert!(expect_divisible(i64::MIN, 2).is_ok());
        assert!(expect_divisible(i64::MAX, -1).is_ok());
    }

    #[test]
    fn test_expect_divisible_real() {
        assert!(expect_divisible_real(1.5, 0.5).is_ok());
        assert!(expect_divisible_real(1.6, 0.5).is_err());
        assert!(expect_divisible_real(1.0, 0.0).is_err());
    }

    #[test]
    fn test_expect_divisible_real_quotient_below_integer() {
        // 0.3 / 0.1 evaluates to 2.9999999999999996
        assert!(expect_divisible_real(0.3, 0.1).is_ok());
        assert!(expect_divisible_real(0.7, 0.1).is_ok());
        assert!(expect_divisible_real(0.35, 0.1).is_err());
    }

    #[test]
    fn test_expect_finite() {
        assert!(expect_finite(1.0).is_ok());
        assert!(expect_finite(f64::INFINITY).is_err());
        assert!(expect_finite_f32(f32::NAN).is_err());
    }

    #[test]
    fn test_expect_non_empty_is_presentation_error() {
        assert_eq!(expect_non_empty("a").unwrap(), "a");
        let err = expect_non_empty(" \t").unwrap_err();
        assert_eq!(err.kind(), OutcomeKind::PresentationError);
        assert_eq!(err.message(), "Non-empty string was expected");
    }
}

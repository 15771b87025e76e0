//! Built-in checkers and validators.

use crate::checker::{Checker, Validator};
use crate::checks;
use crate::outcome::{Flow, Outcome, OutcomeKind};
use crate::registry::{CheckerRegistry, ValidatorRegistry};
use crate::stream::InStream;

pub const COMPARE_NUMBER: &str = "compare-number";
pub const COMPARE_INTEGERS: &str = "compare-integers";
pub const YES_NO: &str = "yes-no";
pub const SINGLE_INTEGER: &str = "single-integer";

impl CheckerRegistry {
    /// Registry holding the built-in checkers.
    pub fn builtin() -> Self {
        CheckerRegistry::new()
            .register(COMPARE_NUMBER, || Box::new(CompareNumber))
            .register(COMPARE_INTEGERS, || Box::new(CompareIntegers))
            .register(YES_NO, || Box::new(TokenSetChecker::yes_no()))
    }
}

impl ValidatorRegistry {
    /// Registry holding the built-in validators.
    pub fn builtin() -> Self {
        ValidatorRegistry::new().register(SINGLE_INTEGER, || {
            Box::new(SingleIntegerValidator::default())
        })
    }
}

/// Compares a single 64-bit integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareNumber;

impl Checker for CompareNumber {
    fn test(&mut self, _input: &mut InStream, output: &mut InStream, answer: &mut InStream) -> Flow {
        let expected = answer.next_long()?;
        let found = output.next_long()?;
        if expected != found {
            return Ok(Outcome::wrong_answer(format!(
                "The answer is {}, but you output {}",
                expected, found
            )));
        }
        Ok(Outcome::ok(format!("OK: {}", expected)))
    }
}

/// Compares two sequences of 64-bit integers element by element.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareIntegers;

/// Count the integers left in `stream`.
fn exhaust(stream: &mut InStream) -> Flow<usize> {
    let mut count = 0;
    while !stream.seek_eof()? {
        stream.next_long()?;
        count += 1;
    }
    Ok(count)
}

impl Checker for CompareIntegers {
    fn test(&mut self, _input: &mut InStream, output: &mut InStream, answer: &mut InStream) -> Flow {
        let mut matched = 0;
        while !output.seek_eof()? && !answer.seek_eof()? {
            let expected = answer.next_long()?;
            let found = output.next_long()?;
            if expected != found {
                return Outcome::quit(
                    OutcomeKind::WrongAnswer,
                    format!(
                        "After {} matched number(s) the next pair differs: expected {}, found {}",
                        matched, expected, found
                    ),
                );
            }
            matched += 1;
        }

        let extra = exhaust(output)?;
        let missing = exhaust(answer)?;
        if extra != 0 {
            return Outcome::quit(
                OutcomeKind::PresentationError,
                format!(
                    "After {} matched number(s), the output contains {} extra elements",
                    matched, extra
                ),
            );
        }
        if missing != 0 {
            return Outcome::quit(
                OutcomeKind::PresentationError,
                format!(
                    "After {} matched number(s), the output lacks {} more elements",
                    matched, missing
                ),
            );
        }
        Ok(Outcome::ok(format!("{} number(s)", matched)))
    }
}

/// Expects one token from a fixed set in both the answer and the output, and
/// compares them exactly.
///
/// A token that matches a set member only up to letter case is well-formed
/// but wrong: `yes` against `YES` is a wrong answer, `MAYBE` a presentation
/// error.
#[derive(Debug, Clone)]
pub struct TokenSetChecker {
    allowed: Vec<String>,
}

impl TokenSetChecker {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn yes_no() -> Self {
        Self::new(["YES", "NO"])
    }

    fn expectation(&self) -> String {
        let quoted: Vec<String> = self.allowed.iter().map(|t| format!("'{}'", t)).collect();
        quoted.join(" or ")
    }

    fn next_allowed(&self, stream: &mut InStream) -> Flow<String> {
        let token = stream.next_token()?;
        if !self.allowed.iter().any(|t| t.eq_ignore_ascii_case(&token)) {
            return stream.quit(
                OutcomeKind::PresentationError,
                format!(
                    "Expected {}, found '{}'",
                    self.expectation(),
                    checks::shrink(&token, checks::STRING_PREVIEW_LEN)
                ),
            );
        }
        Ok(token)
    }
}

impl Checker for TokenSetChecker {
    fn test(&mut self, _input: &mut InStream, output: &mut InStream, answer: &mut InStream) -> Flow {
        let expected = self.next_allowed(answer)?;
        let found = self.next_allowed(output)?;
        if expected != found {
            return Outcome::quit(
                OutcomeKind::WrongAnswer,
                format!("Expected {} found {}", expected, found),
            );
        }
        Ok(Outcome::ok(expected))
    }
}

/// Accepts an input made of one integer in `[min; max]` on its own line.
#[derive(Debug, Clone, Copy)]
pub struct SingleIntegerValidator {
    min: i64,
    max: i64,
}

impl SingleIntegerValidator {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl Default for SingleIntegerValidator {
    fn default() -> Self {
        Self::new(i64::MIN, i64::MAX)
    }
}

impl Validator for SingleIntegerValidator {
    fn validate(&mut self, input: &mut InStream) -> Flow {
        let value = input.next_long()?;
        checks::expect_in_range(value, self.min, self.max)?;
        input.expect_eoln("Line break expected after the integer")?;
        input.skip_line()?;
        input.expect_eof("Extra data after the integer")?;
        Ok(Outcome::ok(format!("n = {}", value)))
    }
}

//! Verdict model.
//!
//! An [`Outcome`] is the single terminal value of a checker or validator run.
//! It is produced in one of two equivalent ways:
//!
//! - returned normally as `Ok(outcome)` from the entry point, or
//! - raised from anywhere below it as `Err(outcome)` and carried up by `?`.
//!
//! The orchestrator folds both branches of a [`Flow`] into the same verdict,
//! so a helper buried several calls deep can end the run with
//! `return Outcome::quit(..)` or [`quit!`](crate::quit) without every caller
//! inspecting the result.

use std::fmt;

/// Control-flow carrier for verdicts: `Err` unwinds straight to the orchestrator.
pub type Flow<T = Outcome> = std::result::Result<T, Outcome>;

/// Verdict kinds. Compared by identity only; there is no severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// The answer is accepted.
    Ok,
    /// Content mismatch; the contestant's fault.
    WrongAnswer,
    /// Malformed contestant output, or leftover output after a correct answer.
    PresentationError,
    /// Jury data or infrastructure problem.
    Fail,
    /// Partial credit carrying a score.
    Points,
}

impl OutcomeKind {
    /// Short upper-case tag used in logs and the `Display` form of an outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Ok => "OK",
            OutcomeKind::WrongAnswer => "WA",
            OutcomeKind::PresentationError => "PE",
            OutcomeKind::Fail => "FAIL",
            OutcomeKind::Points => "POINTS",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score attached to a [`OutcomeKind::Points`] outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    Integer(i64),
    Fractional(f64),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Integer(value) => write!(f, "{}", value),
            Score::Fractional(value) => write!(f, "{:.10}", value),
        }
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score::Integer(value)
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Score::Integer(i64::from(value))
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Score::Fractional(value)
    }
}

/// An immutable verdict: kind, human-readable message and an optional score.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    kind: OutcomeKind,
    message: String,
    score: Option<Score>,
}

impl Outcome {
    /// Build an outcome of the given kind. Never fails.
    pub fn new(kind: OutcomeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            score: None,
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Ok, message)
    }

    pub fn wrong_answer(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::WrongAnswer, message)
    }

    pub fn presentation_error(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::PresentationError, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Fail, message)
    }

    /// Partial-credit outcome.
    pub fn points(score: impl Into<Score>, message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Points,
            message: message.into(),
            score: Some(score.into()),
        }
    }

    /// Abort the current run with this verdict.
    ///
    /// ```
    /// use judgekit_core::{Flow, Outcome, OutcomeKind};
    ///
    /// fn positive(value: i64) -> Flow<i64> {
    ///     if value <= 0 {
    ///         return Outcome::quit(OutcomeKind::WrongAnswer, "value must be positive");
    ///     }
    ///     Ok(value)
    /// }
    ///
    /// assert_eq!(positive(-1).unwrap_err().kind(), OutcomeKind::WrongAnswer);
    /// ```
    pub fn quit<T>(kind: OutcomeKind, message: impl Into<String>) -> Flow<T> {
        Err(Self::new(kind, message))
    }

    /// Raise an already built outcome.
    pub fn raise<T>(self) -> Flow<T> {
        Err(self)
    }

    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    /// The message exactly as the checker supplied it.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    pub fn is_ok(&self) -> bool {
        self.kind == OutcomeKind::Ok
    }

    /// Report text: the message, prefixed by the score for points outcomes.
    pub fn comment(&self) -> String {
        match self.score {
            Some(score) => format!("{} {}", score, self.message),
            None => self.message.clone(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.comment())
    }
}

impl std::error::Error for Outcome {}

/// I/O failures inside checker code are infrastructure failures.
impl From<std::io::Error> for Outcome {
    fn from(err: std::io::Error) -> Self {
        Outcome::fail(format!("I/O error: {}", err))
    }
}

/// Return early from the enclosing function with a formatted verdict.
///
/// ```
/// use judgekit_core::{quit, Flow, OutcomeKind};
///
/// fn check(expected: i64, found: i64) -> Flow<()> {
///     if expected != found {
///         quit!(OutcomeKind::WrongAnswer, "expected {}, found {}", expected, found);
///     }
///     Ok(())
/// }
///
/// assert!(check(1, 2).is_err());
/// ```
#[macro_export]
macro_rules! quit {
    ($kind:expr, $($arg:tt)+) => {
        return ::std::result::Result::Err($crate::Outcome::new($kind, format!($($arg)+)))
    };
}

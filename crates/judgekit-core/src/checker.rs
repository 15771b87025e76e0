//! Entry points supplied by problem setters.
//!
//! Both traits return a [`Flow`]: `Ok(outcome)` is the normal verdict, and an
//! `Err(outcome)` raised anywhere below (usually by `?` on a stream call) is
//! treated the same way by the orchestrator.
//!
//! Closures with the right shape implement the traits directly, which keeps
//! one-off checkers short:
//!
//! ```
//! use judgekit_core::{Checker, Flow, InStream, Outcome};
//!
//! let mut checker = |_inf: &mut InStream, ouf: &mut InStream, ans: &mut InStream| -> Flow {
//!     let expected = ans.next_long()?;
//!     let found = ouf.next_long()?;
//!     if expected == found {
//!         Ok(Outcome::ok(expected.to_string()))
//!     } else {
//!         Ok(Outcome::wrong_answer(format!("expected {}, found {}", expected, found)))
//!     }
//! };
//! # fn assert_checker(_: &mut dyn Checker) {}
//! # assert_checker(&mut checker);
//! ```

use crate::outcome::Flow;
use crate::stream::InStream;

/// Compares a contestant's output against the jury answer.
pub trait Checker {
    /// Judge one test. `input` is the problem input, `output` the contestant's
    /// output and `answer` the jury answer.
    fn test(&mut self, input: &mut InStream, output: &mut InStream, answer: &mut InStream) -> Flow;
}

impl<F> Checker for F
where
    F: FnMut(&mut InStream, &mut InStream, &mut InStream) -> Flow,
{
    fn test(&mut self, input: &mut InStream, output: &mut InStream, answer: &mut InStream) -> Flow {
        self(input, output, answer)
    }
}

/// Verifies that a test input satisfies the problem constraints.
pub trait Validator {
    fn validate(&mut self, input: &mut InStream) -> Flow;
}

impl<F> Validator for F
where
    F: FnMut(&mut InStream) -> Flow,
{
    fn validate(&mut self, input: &mut InStream) -> Flow {
        self(input)
    }
}

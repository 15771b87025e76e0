//! Testsys adapter.
//!
//! Exit codes: OK 0, WA 1, PE 2, FAIL 3. Testsys has no partial credit, so
//! a points outcome is an adapter error rather than a verdict.

use std::io::Write;

use crate::error::{JudgeError, Result};
use crate::outcome::{Outcome, OutcomeKind};

use super::ResultAdapter;

pub const ID: &str = "kitten";

#[derive(Debug, Clone, Copy, Default)]
pub struct KittenAdapter;

impl KittenAdapter {
    fn unsupported(kind: OutcomeKind) -> JudgeError {
        JudgeError::UnsupportedOutcome { adapter: ID, kind }
    }

    fn prefix(kind: OutcomeKind) -> Result<&'static str> {
        match kind {
            OutcomeKind::Fail => Ok("* Облом * "),
            OutcomeKind::PresentationError => Ok("* Формат в/в * "),
            OutcomeKind::Ok => Ok("* ok * "),
            OutcomeKind::WrongAnswer => Ok("* Неверный ответ * "),
            OutcomeKind::Points => Err(Self::unsupported(kind)),
        }
    }
}

impl ResultAdapter for KittenAdapter {
    fn name(&self) -> &'static str {
        ID
    }

    fn init_args(&mut self, _args: &[String]) {}

    fn exit_code_for(&self, outcome: &Outcome) -> Result<i32> {
        match outcome.kind() {
            OutcomeKind::Ok => Ok(0),
            OutcomeKind::WrongAnswer => Ok(1),
            OutcomeKind::PresentationError => Ok(2),
            OutcomeKind::Fail => Ok(3),
            kind @ OutcomeKind::Points => Err(Self::unsupported(kind)),
        }
    }

    // Testsys reads the same line from the console and from the report file.
    fn print_message(&self, outcome: &Outcome, out: &mut dyn Write, _console: bool) -> Result<()> {
        let prefix = Self::prefix(outcome.kind())?;
        writeln!(out, "{}{}", prefix, outcome.comment())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let adapter = KittenAdapter;
        assert_eq!(adapter.exit_code_for(&Outcome::ok("")).unwrap(), 0);
        assert_eq!(adapter.exit_code_for(&Outcome::wrong_answer("")).unwrap(), 1);
        assert_eq!(
            adapter
                .exit_code_for(&Outcome::presentation_error(""))
                .unwrap(),
            2
        );
        assert_eq!(adapter.exit_code_for(&Outcome::fail("")).unwrap(), 3);
    }

    #[test]
    fn test_points_is_rejected() {
        let adapter = KittenAdapter;
        let outcome = Outcome::points(5, "partial");
        let err = adapter.exit_code_for(&outcome).unwrap_err();
        assert!(matches!(
            err,
            JudgeError::UnsupportedOutcome {
                adapter: "kitten",
                kind: OutcomeKind::Points
            }
        ));

        let mut buf = Vec::new();
        assert!(adapter.print_message(&outcome, &mut buf, false).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_same_line_for_console_and_file() {
        let adapter = KittenAdapter;
        let outcome = Outcome::wrong_answer("1 vs 2");
        let mut console = Vec::new();
        let mut file = Vec::new();
        adapter.print_message(&outcome, &mut console, true).unwrap();
        adapter.print_message(&outcome, &mut file, false).unwrap();
        assert_eq!(console, file);
        assert_eq!(
            String::from_utf8(console).unwrap(),
            "* Неверный ответ * 1 vs 2\n"
        );
    }

    #[test]
    fn test_prefixes() {
        let line = |o: Outcome| {
            let mut buf = Vec::new();
            KittenAdapter.print_message(&o, &mut buf, true).unwrap();
            String::from_utf8(buf).unwrap()
        };
        assert_eq!(line(Outcome::ok("good")), "* ok * good\n");
        assert_eq!(line(Outcome::fail("jury")), "* Облом * jury\n");
        assert_eq!(
            line(Outcome::presentation_error("eof")),
            "* Формат в/в * eof\n"
        );
    }
}

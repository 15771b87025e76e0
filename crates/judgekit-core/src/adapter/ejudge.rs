//! ejudge adapter.
//!
//! Exit codes: OK 0, PE 4, WA 5, FAIL and POINTS 6.

use std::io::Write;

use crate::error::Result;
use crate::outcome::{Outcome, OutcomeKind};

use super::ResultAdapter;

pub const ID: &str = "ejudge";

#[derive(Debug, Clone, Copy, Default)]
pub struct EjudgeAdapter;

fn console_prefix(kind: OutcomeKind) -> &'static str {
    match kind {
        OutcomeKind::Fail => "FAIL ",
        OutcomeKind::PresentationError => "wrong output format ",
        OutcomeKind::Ok => "ok ",
        OutcomeKind::WrongAnswer => "wrong answer ",
        OutcomeKind::Points => "",
    }
}

impl ResultAdapter for EjudgeAdapter {
    fn name(&self) -> &'static str {
        ID
    }

    fn init_args(&mut self, _args: &[String]) {}

    fn exit_code_for(&self, outcome: &Outcome) -> Result<i32> {
        Ok(match outcome.kind() {
            OutcomeKind::Ok => 0,
            OutcomeKind::WrongAnswer => 5,
            OutcomeKind::PresentationError => 4,
            OutcomeKind::Fail | OutcomeKind::Points => 6,
        })
    }

    fn print_message(&self, outcome: &Outcome, out: &mut dyn Write, console: bool) -> Result<()> {
        if console {
            writeln!(out, "{}{}", console_prefix(outcome.kind()), outcome.comment())?;
        } else {
            writeln!(out, "{}", outcome.comment())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(outcome: &Outcome, console: bool) -> String {
        let mut buf = Vec::new();
        EjudgeAdapter.print_message(outcome, &mut buf, console).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_exit_codes() {
        let code = |o: Outcome| EjudgeAdapter.exit_code_for(&o).unwrap();
        assert_eq!(code(Outcome::ok("")), 0);
        assert_eq!(code(Outcome::wrong_answer("")), 5);
        assert_eq!(code(Outcome::presentation_error("")), 4);
        assert_eq!(code(Outcome::fail("")), 6);
        assert_eq!(code(Outcome::points(1, "")), 6);
    }

    #[test]
    fn test_console_has_no_points_prefix() {
        assert_eq!(render(&Outcome::points(3, "of 5"), true), "3 of 5\n");
        assert_eq!(render(&Outcome::wrong_answer("x"), true), "wrong answer x\n");
    }

    #[test]
    fn test_file_report_is_comment_only() {
        assert_eq!(render(&Outcome::presentation_error("eof"), false), "eof\n");
    }
}

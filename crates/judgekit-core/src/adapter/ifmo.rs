//! PCMS2 / APPES adapter.
//!
//! Exit codes: OK 0, WA 1, PE 2, FAIL 3, POINTS 7. With `-xml` (or the
//! legacy `-appes`) as first argument every verdict exits 0 and the report
//! file holds a single `<result>` element instead.

use std::io::Write;

use crate::error::Result;
use crate::outcome::{Outcome, OutcomeKind};

use super::ResultAdapter;

pub const ID: &str = "ifmo";

const XML_MODE_ARG: &str = "-xml";
const APPES_MODE_ARG: &str = "-appes";

/// Replaces control characters in XML attribute text.
const CONTROL_PLACEHOLDER: char = '.';

#[derive(Debug, Clone, Default)]
pub struct IfmoAdapter {
    xml_mode: bool,
}

impl IfmoAdapter {
    pub fn xml() -> Self {
        Self { xml_mode: true }
    }

    pub fn is_xml_mode(&self) -> bool {
        self.xml_mode
    }
}

/// Value of the `outcome` attribute in XML reports.
fn xml_outcome_name(kind: OutcomeKind) -> &'static str {
    match kind {
        OutcomeKind::Ok => "accepted",
        OutcomeKind::WrongAnswer => "wrong-answer",
        OutcomeKind::PresentationError => "presentation-error",
        OutcomeKind::Fail => "fail",
        OutcomeKind::Points => "points",
    }
}

fn console_prefix(kind: OutcomeKind) -> &'static str {
    match kind {
        OutcomeKind::Fail => "FAIL ",
        OutcomeKind::PresentationError => "wrong output format ",
        OutcomeKind::Ok => "ok ",
        OutcomeKind::WrongAnswer => "wrong answer ",
        OutcomeKind::Points => "points ",
    }
}

/// Escape `text` for use inside a double-quoted XML attribute.
pub fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if c < ' ' => escaped.push(CONTROL_PLACEHOLDER),
            c => escaped.push(c),
        }
    }
    escaped
}

impl ResultAdapter for IfmoAdapter {
    fn name(&self) -> &'static str {
        ID
    }

    fn init_args(&mut self, args: &[String]) {
        self.xml_mode = args.first().map_or(false, |arg| {
            arg.eq_ignore_ascii_case(XML_MODE_ARG) || arg.eq_ignore_ascii_case(APPES_MODE_ARG)
        });
    }

    fn exit_code_for(&self, outcome: &Outcome) -> Result<i32> {
        if self.xml_mode {
            return Ok(0);
        }
        Ok(match outcome.kind() {
            OutcomeKind::Ok => 0,
            OutcomeKind::WrongAnswer => 1,
            OutcomeKind::PresentationError => 2,
            OutcomeKind::Fail => 3,
            OutcomeKind::Points => 7,
        })
    }

    fn print_message(&self, outcome: &Outcome, out: &mut dyn Write, console: bool) -> Result<()> {
        if console {
            writeln!(out, "{}{}", console_prefix(outcome.kind()), outcome.comment())?;
        } else if self.xml_mode {
            writeln!(out, "<?xml version = \"1.0\" encoding = \"utf-8\"?>")?;
            writeln!(
                out,
                "<result outcome = \"{}\" comment = \"{}\" />",
                xml_outcome_name(outcome.kind()),
                xml_escape(&outcome.comment())
            )?;
        } else {
            writeln!(out, "{}", outcome.comment())?;
        }
        Ok(())
    }
}

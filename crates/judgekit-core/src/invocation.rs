//! Command-line argument layout for checker and validator runs.

use std::fmt;
use std::path::PathBuf;

use crate::error::{JudgeError, Result};
use crate::manifest::Manifest;

pub const CHECKER_USAGE: &str = "Usage: judgekit [<checker-id>] <input-file> <output-file> <answer-file> [<report-file> [<adapter-args>...]]\n    (<checker-id> may be omitted when the build embeds a checker)";

pub const VALIDATOR_USAGE: &str = "Usage: judgekit --validate [<validator-id>] [<input-file>]\n    (<validator-id> may be omitted when the build embeds a validator; input is read from stdin when no file is given)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Checker,
    Validator,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Checker => "checker",
            Mode::Validator => "validator",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Mode::Checker => CHECKER_USAGE,
            Mode::Validator => VALIDATOR_USAGE,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the component id and how many leading arguments it consumed.
///
/// An embedded id wins; the first argument is skipped only when it repeats
/// that id. Without an embedded id the first argument names the component.
fn resolve_component<'a>(embedded: Option<&'a str>, args: &'a [String]) -> Option<(&'a str, usize)> {
    let first = args.first().map(String::as_str);
    match (embedded, first) {
        (Some(id), Some(first)) if first == id => Some((id, 1)),
        (Some(id), _) => Some((id, 0)),
        (None, Some(first)) => Some((first, 1)),
        (None, None) => None,
    }
}

/// Parsed `[<checker-id>] <input> <output> <answer> [<report> [<args>...]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerInvocation {
    pub checker_id: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub answer: PathBuf,
    pub report: Option<PathBuf>,
    pub adapter_args: Vec<String>,
}

impl CheckerInvocation {
    pub fn parse(args: &[String], manifest: &Manifest) -> Result<Self> {
        let (checker_id, skip) = resolve_component(manifest.checker.as_deref(), args)
            .ok_or_else(|| JudgeError::Usage("no checker given".to_string()))?;
        let rest = &args[skip..];
        if rest.len() < 3 {
            return Err(JudgeError::Usage(format!(
                "expected input, output and answer files, got {} argument(s)",
                rest.len()
            )));
        }
        Ok(Self {
            checker_id: checker_id.to_string(),
            input: PathBuf::from(&rest[0]),
            output: PathBuf::from(&rest[1]),
            answer: PathBuf::from(&rest[2]),
            report: rest.get(3).map(PathBuf::from),
            adapter_args: rest.iter().skip(4).cloned().collect(),
        })
    }

    /// Reports go to the console when no report file was named.
    pub fn is_console(&self) -> bool {
        self.report.is_none()
    }
}

/// Parsed `[<validator-id>] [<input>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorInvocation {
    pub validator_id: String,
    /// `None` reads standard input.
    pub input: Option<PathBuf>,
}

impl ValidatorInvocation {
    pub fn parse(args: &[String], manifest: &Manifest) -> Result<Self> {
        let (validator_id, skip) = resolve_component(manifest.validator.as_deref(), args)
            .ok_or_else(|| JudgeError::Usage("no validator given".to_string()))?;
        let rest = &args[skip..];
        if rest.len() > 1 {
            return Err(JudgeError::Usage(format!(
                "expected at most one input file, got {}",
                rest.len()
            )));
        }
        Ok(Self {
            validator_id: validator_id.to_string(),
            input: rest.first().map(PathBuf::from),
        })
    }
}

//! Framework-level error taxonomy.
//!
//! These are problems with how the framework was invoked or configured, never
//! verdicts about a submission. Verdicts travel as [`Outcome`](crate::Outcome).

use std::path::PathBuf;

use crate::outcome::OutcomeKind;

/// Exit code for usage and configuration errors.
pub const USAGE_EXIT_CODE: i32 = 64;

/// Exit code for adapter internal errors.
pub const INTERNAL_EXIT_CODE: i32 = 70;

/// Errors raised outside the verdict flow.
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("unknown checker: {0}")]
    UnknownChecker(String),

    #[error("unknown validator: {0}")]
    UnknownValidator(String),

    #[error("no result adapter found for checker type \"{0}\"")]
    UnknownAdapter(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("cannot write report file {path:?}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{adapter} adapter does not support {kind} outcomes")]
    UnsupportedOutcome {
        adapter: &'static str,
        kind: OutcomeKind,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl JudgeError {
    /// Process exit code for this error. Distinct from every verdict code.
    pub fn exit_code(&self) -> i32 {
        match self {
            JudgeError::UnsupportedOutcome { .. } | JudgeError::Io(_) => INTERNAL_EXIT_CODE,
            _ => USAGE_EXIT_CODE,
        }
    }

    /// Whether the usage text should accompany this error.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            JudgeError::Usage(_) | JudgeError::UnknownChecker(_) | JudgeError::UnknownValidator(_)
        )
    }
}

/// Result type for framework operations.
pub type Result<T> = std::result::Result<T, JudgeError>;

//! judgekit core library
//!
//! Stream tokenizer, verdict model, result adapters and run orchestration
//! for programming contest checkers and validators.

pub mod adapter;
pub mod builtin;
pub mod checker;
pub mod checks;
pub mod config;
pub mod error;
pub mod framework;
pub mod invocation;
pub mod manifest;
pub mod obs;
pub mod outcome;
pub mod registry;
pub mod source;
pub mod stream;
pub mod telemetry;

pub use adapter::{EjudgeAdapter, IfmoAdapter, KittenAdapter, ResultAdapter, DEFAULT_ADAPTER};
pub use builtin::{CompareIntegers, CompareNumber, SingleIntegerValidator, TokenSetChecker};
pub use checker::{Checker, Validator};
pub use config::{RunConfig, CHECKER_TYPE_ENV, EXPECTED_EXIT_CODE_ENV};
pub use error::{JudgeError, Result, INTERNAL_EXIT_CODE, USAGE_EXIT_CODE};
pub use framework::{judge, validate, CheckerFramework, ReportSink, RunReport, StreamSet};
pub use invocation::{CheckerInvocation, Mode, ValidatorInvocation};
pub use manifest::Manifest;
pub use outcome::{Flow, Outcome, OutcomeKind, Score};
pub use registry::{AdapterRegistry, CheckerRegistry, Registry, ValidatorRegistry};
pub use source::{CharSource, SourceError};
pub use stream::{InStream, OutcomeMapping, StreamRole};
pub use telemetry::init_tracing;

/// Crate version, reported by the binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

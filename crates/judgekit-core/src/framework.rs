//! Run orchestration.
//!
//! [`CheckerFramework`] resolves the component named on the command line,
//! opens its streams with role-specific remapping, runs it, applies the
//! leftover-output rule and hands the verdict to the configured result
//! adapter. Streams and report writers are released on every path.

use std::any::Any;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use crate::adapter::ResultAdapter;
use crate::checker::{Checker, Validator};
use crate::config::RunConfig;
use crate::error::{JudgeError, Result};
use crate::invocation::{CheckerInvocation, Mode, ValidatorInvocation};
use crate::manifest::Manifest;
use crate::obs::{self, RunSpan};
use crate::outcome::{Flow, Outcome};
use crate::registry::{AdapterRegistry, CheckerRegistry, ValidatorRegistry};
use crate::stream::{InStream, StreamRole};

/// Verdict given to a correct answer followed by more output.
pub const EXTRA_OUTPUT_MESSAGE: &str = "Extra information in output file";

/// Final verdict of one run and the exit code the adapter chose for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub outcome: Outcome,
    pub exit_code: i32,
}

/// The three streams of a checker run. Dropping the set closes them.
pub struct StreamSet {
    pub input: InStream,
    pub output: InStream,
    pub answer: InStream,
}

impl StreamSet {
    pub fn open(input: &Path, output: &Path, answer: &Path) -> Flow<Self> {
        Ok(Self {
            input: InStream::open(input, StreamRole::Input)?,
            output: InStream::open(output, StreamRole::Output)?,
            answer: InStream::open(answer, StreamRole::Answer)?,
        })
    }

    pub fn close(&mut self) {
        self.input.close();
        self.output.close();
        self.answer.close();
    }
}

impl Drop for StreamSet {
    fn drop(&mut self) {
        self.close();
    }
}

/// Where the report is written.
pub enum ReportSink {
    /// Flushed but left open.
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
}

impl ReportSink {
    /// Create (or truncate) a report file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| JudgeError::Report {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ReportSink::File {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn stdout() -> Self {
        ReportSink::Stdout(io::stdout())
    }

    pub fn stderr() -> Self {
        ReportSink::Stderr(io::stderr())
    }

    pub fn writer(&mut self) -> &mut dyn Write {
        match self {
            ReportSink::Stdout(out) => out,
            ReportSink::Stderr(err) => err,
            ReportSink::File { writer, .. } => writer,
        }
    }

    /// Flush buffered report text. A report file is closed when the sink drops.
    pub fn finish(&mut self) -> Result<()> {
        match self {
            ReportSink::Stdout(out) => out.flush()?,
            ReportSink::Stderr(err) => err.flush()?,
            ReportSink::File { path, writer } => {
                writer.flush().map_err(|source| JudgeError::Report {
                    path: path.clone(),
                    source,
                })?
            }
        }
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panicked with a non-string payload".to_string()
    }
}

/// Fold a component's flow, or its panic, into a verdict.
fn settle(result: std::thread::Result<Flow>, component: &str) -> Outcome {
    match result {
        Ok(Ok(outcome)) | Ok(Err(outcome)) => outcome,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            obs::emit_component_panicked(component, &message);
            Outcome::fail(message)
        }
    }
}

/// Run a checker over three open streams and apply the leftover-output rule.
///
/// An accepted answer becomes a presentation error when anything but
/// whitespace remains in `output`.
pub fn judge(
    checker: &mut dyn Checker,
    input: &mut InStream,
    output: &mut InStream,
    answer: &mut InStream,
) -> Outcome {
    let result = panic::catch_unwind(AssertUnwindSafe(|| checker.test(input, output, answer)));
    let outcome = settle(result, "checker");
    if !outcome.is_ok() {
        return outcome;
    }
    match output.seek_eof() {
        Ok(true) => outcome,
        Ok(false) => {
            obs::emit_extra_output_downgrade();
            Outcome::presentation_error(EXTRA_OUTPUT_MESSAGE)
        }
        Err(raised) => raised,
    }
}

/// Run a validator over its input stream.
pub fn validate(validator: &mut dyn Validator, input: &mut InStream) -> Outcome {
    let result = panic::catch_unwind(AssertUnwindSafe(|| validator.validate(input)));
    settle(result, "validator")
}

/// Exit code of a self-test run: 0 when the computed code matches.
pub fn self_test_exit_code(actual: i32, expected: i32) -> i32 {
    obs::emit_self_test(actual, expected);
    if actual == expected {
        0
    } else {
        1
    }
}

/// Entry point tying registries, configuration and the command line together.
pub struct CheckerFramework {
    checkers: CheckerRegistry,
    validators: ValidatorRegistry,
    adapters: AdapterRegistry,
    config: RunConfig,
    manifest: Manifest,
}

impl CheckerFramework {
    pub fn new(checkers: CheckerRegistry, adapters: AdapterRegistry, config: RunConfig) -> Self {
        Self {
            checkers,
            validators: ValidatorRegistry::new(),
            adapters,
            config,
            manifest: Manifest::default(),
        }
    }

    pub fn with_validators(mut self, validators: ValidatorRegistry) -> Self {
        self.validators = validators;
        self
    }

    pub fn with_manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = manifest;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    fn adapter(&self) -> Result<Box<dyn ResultAdapter>> {
        let id = &self.config.adapter_id;
        self.adapters
            .create(id)
            .ok_or_else(|| JudgeError::UnknownAdapter(id.clone()))
    }

    /// Run in `mode` and return the process exit code, honouring the
    /// self-test setting.
    pub fn execute(&self, mode: Mode, args: &[String]) -> Result<i32> {
        let report = match mode {
            Mode::Checker => self.run_checker(args)?,
            Mode::Validator => self.run_validator(args)?,
        };
        Ok(match self.config.expected_exit_code {
            Some(expected) => self_test_exit_code(report.exit_code, expected),
            None => report.exit_code,
        })
    }

    /// `[<checker-id>] <input> <output> <answer> [<report> [<adapter-args>...]]`
    pub fn run_checker(&self, args: &[String]) -> Result<RunReport> {
        let invocation = CheckerInvocation::parse(args, &self.manifest)?;
        let mut checker = self
            .checkers
            .create(&invocation.checker_id)
            .ok_or_else(|| JudgeError::UnknownChecker(invocation.checker_id.clone()))?;
        let mut adapter = self.adapter()?;
        adapter.init_args(&invocation.adapter_args);
        let mut sink = match &invocation.report {
            Some(path) => ReportSink::create(path)?,
            None => ReportSink::stdout(),
        };

        let _span = RunSpan::enter(Mode::Checker.as_str(), &invocation.checker_id);
        obs::emit_run_started(Mode::Checker.as_str(), &invocation.checker_id);

        let outcome = match StreamSet::open(&invocation.input, &invocation.output, &invocation.answer)
        {
            Ok(mut streams) => {
                let StreamSet {
                    input,
                    output,
                    answer,
                } = &mut streams;
                judge(checker.as_mut(), input, output, answer)
            }
            Err(outcome) => outcome,
        };

        report(adapter.as_ref(), outcome, &mut sink, invocation.is_console())
    }

    /// `[<validator-id>] [<input>]`; the report goes to stderr.
    pub fn run_validator(&self, args: &[String]) -> Result<RunReport> {
        let invocation = ValidatorInvocation::parse(args, &self.manifest)?;
        let mut validator = self
            .validators
            .create(&invocation.validator_id)
            .ok_or_else(|| JudgeError::UnknownValidator(invocation.validator_id.clone()))?;
        let adapter = self.adapter()?;
        let mut sink = ReportSink::stderr();

        let _span = RunSpan::enter(Mode::Validator.as_str(), &invocation.validator_id);
        obs::emit_run_started(Mode::Validator.as_str(), &invocation.validator_id);

        let opened = match &invocation.input {
            Some(path) => InStream::open(path, StreamRole::RawInput),
            None => InStream::from_reader(io::stdin(), StreamRole::RawInput),
        };
        let outcome = match opened {
            Ok(mut input) => {
                let outcome = validate(validator.as_mut(), &mut input);
                input.close();
                outcome
            }
            Err(outcome) => outcome,
        };

        report(adapter.as_ref(), outcome, &mut sink, true)
    }
}

/// Hand `outcome` to `adapter` and flush the report.
pub fn report(
    adapter: &dyn ResultAdapter,
    outcome: Outcome,
    sink: &mut ReportSink,
    console: bool,
) -> Result<RunReport> {
    let exit_code = adapter.exit_code_for(&outcome)?;
    adapter.print_message(&outcome, sink.writer(), console)?;
    sink.finish()?;
    obs::emit_verdict_reported(adapter.name(), outcome.kind(), exit_code);
    Ok(RunReport { outcome, exit_code })
}

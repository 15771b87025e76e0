//! Structured observability hooks for checker and validator runs.
//!
//! This module provides:
//! - Run-scoped tracing spans via the `RunSpan` RAII guard
//! - Emission functions for the run lifecycle: start, stream open/close,
//!   remapped verdicts, the extra-output downgrade, panics, the final report
//!   and the exit-code self-test

use tracing::{debug, info, warn};

use crate::outcome::OutcomeKind;

/// RAII guard that enters a run-scoped tracing span for the duration of a run.
///
/// ```ignore
/// let _span = RunSpan::enter("checker", "compare-integers");
/// // every event below is tagged with mode and component
/// ```
pub struct RunSpan {
    _span: tracing::span::EnteredSpan,
}

impl RunSpan {
    /// Create and enter a span tagged with the run mode and component id.
    pub fn enter(mode: &str, component: &str) -> Self {
        let span = tracing::info_span!("judgekit.run", mode = %mode, component = %component);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a checker or validator run started.
pub fn emit_run_started(mode: &str, component: &str) {
    info!(event = "run.started", mode = %mode, component = %component);
}

/// Emit event: a stream was opened for a role.
pub fn emit_stream_opened(role: &str, origin: &str) {
    debug!(event = "stream.opened", role = %role, origin = %origin);
}

/// Emit event: a stream released its reader.
pub fn emit_stream_closed(role: &str) {
    debug!(event = "stream.closed", role = %role);
}

/// Emit event: a stream raised a verdict, possibly remapped by its role.
pub fn emit_outcome_raised(role: &str, raised: OutcomeKind, resolved: OutcomeKind) {
    debug!(
        event = "stream.outcome_raised",
        role = %role,
        raised = %raised,
        resolved = %resolved,
        remapped = raised != resolved,
    );
}

/// Emit event: an accepted answer was downgraded because output remained.
pub fn emit_extra_output_downgrade() {
    info!(event = "run.extra_output", downgraded_to = %OutcomeKind::PresentationError);
}

/// Emit event: checker or validator code panicked (warning level).
pub fn emit_component_panicked(component: &str, message: &str) {
    warn!(event = "run.panicked", component = %component, message = %message);
}

/// Emit event: the final verdict was handed to a result adapter.
pub fn emit_verdict_reported(adapter: &str, kind: OutcomeKind, exit_code: i32) {
    info!(
        event = "run.reported",
        adapter = %adapter,
        kind = %kind,
        exit_code = exit_code,
    );
}

/// Emit event: the computed exit code was compared with the expected one.
pub fn emit_self_test(actual: i32, expected: i32) {
    let passed = actual == expected;
    if passed {
        info!(event = "selftest.checked", actual = actual, expected = expected, passed = passed);
    } else {
        warn!(event = "selftest.checked", actual = actual, expected = expected, passed = passed);
    }
}

//! Sequence Event Port
//!
//! Provides an observable interface for sequence runs.
//! Enables the console step log, NDJSON event streams, and testing.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::value_objects::{CommandSpec, FailureCategory, StepKind};

/// Event emitted while a sequence runs
#[derive(Debug, Clone)]
pub enum SequenceEvent {
    /// Sequence started
    Started {
        project_dir: PathBuf,
        domain: String,
        step_count: usize,
        dry_run: bool,
    },

    /// A step is about to run
    StepStarted { step: StepKind },

    /// A command inside a step is about to run
    CommandStarted { step: StepKind, command: CommandSpec },

    /// A step was not run (condition not met or operator skip)
    StepSkipped { step: StepKind, reason: String },

    /// A step completed successfully
    StepSucceeded { step: StepKind, duration: Duration },

    /// A step failed
    StepFailed {
        step: StepKind,
        category: FailureCategory,
        exit_code: i32,
        fatal: bool,
        message: String,
    },

    /// A non-fatal problem was recorded
    Warning { step: StepKind, message: String },

    /// Sequence finished (successfully or aborted)
    Completed {
        success: bool,
        exit_code: i32,
        aborted_at: Option<StepKind>,
        warning_count: usize,
        duration: Duration,
    },
}

/// Trait for receiving sequence events
///
/// Implementations:
/// - `ConsoleEventSink`: step log in the terminal
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait SequenceEventSink {
    fn on_event(&self, event: SequenceEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SequenceEventSink for NoopEventSink {
    fn on_event(&self, _event: SequenceEvent) {}
}

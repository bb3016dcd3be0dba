//! Sequence Result
//!
//! Per-step outcomes of one run and the exit code they add up to.

use std::time::Duration;

use crate::domain::value_objects::{FailureCategory, StepKind};

/// What happened to one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded {
        duration: Duration,
    },
    Skipped {
        reason: String,
    },
    Failed {
        category: FailureCategory,
        exit_code: i32,
        fatal: bool,
        message: String,
    },
    /// An earlier fatal failure stopped the sequence first
    NotRun,
}

impl StepOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            StepOutcome::Succeeded { .. } => "succeeded",
            StepOutcome::Skipped { .. } => "skipped",
            StepOutcome::Failed { fatal: true, .. } => "failed",
            StepOutcome::Failed { fatal: false, .. } => "warning",
            StepOutcome::NotRun => "not-run",
        }
    }

    /// Whether a process was started for this step
    pub fn ran(&self) -> bool {
        matches!(
            self,
            StepOutcome::Succeeded { .. } | StepOutcome::Failed { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub kind: StepKind,
    pub outcome: StepOutcome,
}

/// Result of a sequence run
#[derive(Debug, Clone, Default)]
pub struct SequenceResult {
    pub steps: Vec<StepRecord>,
    /// Messages from tolerated failures
    pub warnings: Vec<String>,
    /// The fatal step that stopped the run
    pub aborted_at: Option<StepKind>,
    /// Exit code of the failing command, 0 on success
    pub exit_code: i32,
    pub duration: Duration,
    pub dry_run: bool,
}

impl SequenceResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.aborted_at.is_none()
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn outcome(&self, kind: StepKind) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|record| record.kind == kind)
            .map(|record| &record.outcome)
    }

    /// Steps whose commands were started, in order
    pub fn ran_steps(&self) -> Vec<StepKind> {
        self.steps
            .iter()
            .filter(|record| record.outcome.ran())
            .map(|record| record.kind)
            .collect()
    }

    pub(crate) fn record(&mut self, kind: StepKind, outcome: StepOutcome) {
        self.steps.push(StepRecord { kind, outcome });
    }
}

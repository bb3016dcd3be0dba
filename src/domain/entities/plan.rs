//! Sequence plan entity
//!
//! The resolved, ordered list of steps for one run: what each step will
//! invoke and whether it runs at all.

use serde::Serialize;

use crate::domain::value_objects::{CommandSpec, DeployEnvironment, StepKind};

/// Whether a planned step runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "disposition", rename_all = "lowercase")]
pub enum StepDisposition {
    Run,
    Skip { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStep {
    pub kind: StepKind,
    pub commands: Vec<CommandSpec>,
    #[serde(flatten)]
    pub disposition: StepDisposition,
}

impl PlannedStep {
    pub fn run(kind: StepKind, commands: Vec<CommandSpec>) -> Self {
        Self {
            kind,
            commands,
            disposition: StepDisposition::Run,
        }
    }

    pub fn skip(kind: StepKind, commands: Vec<CommandSpec>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            commands,
            disposition: StepDisposition::Skip {
                reason: reason.into(),
            },
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.disposition, StepDisposition::Skip { .. })
    }

    pub fn skip_reason(&self) -> Option<&str> {
        match &self.disposition {
            StepDisposition::Skip { reason } => Some(reason),
            StepDisposition::Run => None,
        }
    }
}

/// Ordered steps plus the environment exported to each of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequencePlan {
    pub steps: Vec<PlannedStep>,
    pub environment: DeployEnvironment,
}

impl SequencePlan {
    pub fn new(steps: Vec<PlannedStep>, environment: DeployEnvironment) -> Self {
        let mut steps = steps;
        steps.sort_by_key(|s| s.kind);
        Self { steps, environment }
    }

    pub fn step(&self, kind: StepKind) -> Option<&PlannedStep> {
        self.steps.iter().find(|s| s.kind == kind)
    }

    pub fn runnable_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.is_skipped()).count()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

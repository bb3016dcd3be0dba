//! Sequence Options

use std::path::PathBuf;

use crate::domain::ports::OutputMode;

/// Options for the sequence use case
#[derive(Debug, Clone)]
pub struct SequenceOptions {
    /// Working directory for every command
    pub project_dir: PathBuf,
    /// Announce commands without running them
    pub dry_run: bool,
    /// Where child process output goes
    pub output: OutputMode,
}

impl SequenceOptions {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            dry_run: false,
            output: OutputMode::default(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }
}

//! Command Runner Port
//!
//! Executes one program invocation on behalf of a sequence step. The
//! exported deploy environment travels with every call rather than living
//! in the sequencer's own process environment.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::{CommandSpec, DeployEnvironment};

/// Exit code reported when a program cannot be started at all
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// Exit code reported when a program ends without a code (killed by a signal)
pub const SIGNALLED_EXIT_CODE: i32 = 1;

pub type RunResult<T> = Result<T, RunnerError>;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunnerError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::Spawn { .. } => SPAWN_FAILURE_EXIT_CODE,
        }
    }
}

/// Where child output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child stdout/stderr go straight to the operator's terminal
    #[default]
    Inherit,
    /// Child stdout is routed to stderr so stdout stays machine-readable
    StderrOnly,
}

/// Everything a command needs besides its argv
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub working_dir: PathBuf,
    pub environment: DeployEnvironment,
    pub output: OutputMode,
}

impl CommandContext {
    pub fn new(working_dir: impl Into<PathBuf>, environment: DeployEnvironment) -> Self {
        Self {
            working_dir: working_dir.into(),
            environment,
            output: OutputMode::default(),
        }
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

/// How a finished command exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signalled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code to propagate; signal termination maps to 1
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(SIGNALLED_EXIT_CODE)
    }
}

/// Runs commands synchronously, one at a time
pub trait CommandRunner {
    fn run(&self, command: &CommandSpec, context: &CommandContext) -> RunResult<CommandStatus>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &CommandSpec, context: &CommandContext) -> RunResult<CommandStatus> {
        (**self).run(command, context)
    }
}

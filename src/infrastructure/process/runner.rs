//! Process-backed command runner
//!
//! Spawns each command with `std::process::Command` and waits for it.
//! The child inherits stdin so interactive prompts still work, and its
//! output reaches the operator unmodified.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{
    CommandContext, CommandRunner, CommandStatus, OutputMode, RunResult, RunnerError,
};
use crate::domain::value_objects::CommandSpec;

/// Runs commands as child processes of the sequencer
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(command: &CommandSpec, context: &CommandContext) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .current_dir(context.working_dir())
            .stdin(Stdio::inherit());

        for (key, value) in context.environment.iter() {
            cmd.env(key, value);
        }

        match context.output {
            OutputMode::Inherit => {
                cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
            OutputMode::StderrOnly => {
                // stdout is reserved for NDJSON events
                cmd.stdout(Stdio::from(io::stderr())).stderr(Stdio::inherit());
            }
        }

        cmd
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandSpec, context: &CommandContext) -> RunResult<CommandStatus> {
        let status = Self::build(command, context)
            .status()
            .map_err(|source| RunnerError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::value_objects::DeployEnvironment;
    use tempfile::tempdir;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("sh").arg("-c").arg(script)
    }

    fn context(dir: &std::path::Path) -> CommandContext {
        CommandContext::new(
            dir,
            DeployEnvironment::for_domain("invoices.example.com", "https://invoices.example.com"),
        )
    }

    #[test]
    fn zero_exit_is_success() {
        let dir = tempdir().unwrap();
        let status = ProcessRunner.run(&sh("exit 0"), &context(dir.path())).unwrap();
        assert!(status.success());
    }

    #[test]
    fn exit_code_is_reported() {
        let dir = tempdir().unwrap();
        let status = ProcessRunner.run(&sh("exit 3"), &context(dir.path())).unwrap();
        assert_eq!(status.code, Some(3));
        assert_eq!(status.exit_code(), 3);
    }

    #[test]
    fn exported_environment_reaches_child() {
        let dir = tempdir().unwrap();
        let script = r#"test "$PRODUCTION_DOMAIN" = invoices.example.com && test "$PRODUCTION_URL" = https://invoices.example.com"#;
        let status = ProcessRunner.run(&sh(script), &context(dir.path())).unwrap();
        assert!(status.success());
    }

    #[test]
    fn runs_in_working_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("manage.py"), "").unwrap();
        let status = ProcessRunner
            .run(&sh("test -f manage.py"), &context(dir.path()))
            .unwrap();
        assert!(status.success());
    }

    #[test]
    fn stderr_only_mode_still_runs() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path()).with_output(OutputMode::StderrOnly);
        let status = ProcessRunner.run(&sh("echo routed"), &ctx).unwrap();
        assert!(status.success());
    }

    #[test]
    fn signalled_child_has_no_code() {
        let dir = tempdir().unwrap();
        let status = ProcessRunner
            .run(&sh("kill -TERM $$"), &context(dir.path()))
            .unwrap();
        assert_eq!(status.code, None);
        assert_eq!(status.exit_code(), 1);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let dir = tempdir().unwrap();
        let err = ProcessRunner
            .run(
                &CommandSpec::new("flowdeploy-definitely-not-a-program"),
                &context(dir.path()),
            )
            .unwrap_err();
        assert_eq!(err.exit_code(), 127);
    }
}

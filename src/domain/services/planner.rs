//! Sequence planning service
//!
//! Resolves the fixed step catalogue into a concrete plan for one project:
//! default commands built from the toolchain settings, per-step overrides,
//! the frontend-manifest condition, and operator skips. Probes the project
//! only through the `FileSystem` port.

use std::path::Path;

use crate::config::{Config, ToolchainConfig};
use crate::domain::entities::{PlannedStep, SequencePlan};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{CommandSpec, DeployEnvironment, StepKind};

pub const OPERATOR_SKIP_REASON: &str = "skipped by operator";

pub struct Planner<'a, FS: FileSystem> {
    config: &'a Config,
    file_system: FS,
}

impl<'a, FS: FileSystem> Planner<'a, FS> {
    pub fn new(config: &'a Config, file_system: FS) -> Self {
        Self {
            config,
            file_system,
        }
    }

    /// Build the plan for `project_dir`
    pub fn plan(
        &self,
        project_dir: &Path,
        environment: DeployEnvironment,
        skip: &[StepKind],
    ) -> SequencePlan {
        let steps = StepKind::ALL
            .into_iter()
            .map(|kind| self.plan_step(kind, project_dir, skip))
            .collect();
        SequencePlan::new(steps, environment)
    }

    fn plan_step(&self, kind: StepKind, project_dir: &Path, skip: &[StepKind]) -> PlannedStep {
        let commands = self
            .config
            .step_commands(kind)
            .map(<[CommandSpec]>::to_vec)
            .unwrap_or_else(|| default_commands(kind, &self.config.toolchain));

        if skip.contains(&kind) {
            return PlannedStep::skip(kind, commands, OPERATOR_SKIP_REASON);
        }

        if kind == StepKind::BuildFrontend {
            let manifest = &self.config.toolchain.frontend_manifest;
            if !self.file_system.is_file(&project_dir.join(manifest)) {
                return PlannedStep::skip(kind, commands, format!("{} not found", manifest));
            }
        }

        PlannedStep::run(kind, commands)
    }
}

/// Built-in commands for a step
pub fn default_commands(kind: StepKind, toolchain: &ToolchainConfig) -> Vec<CommandSpec> {
    let manage = |args: &[&str]| {
        CommandSpec::new(&toolchain.python)
            .arg(&toolchain.manage)
            .args(args.iter().copied())
    };

    match kind {
        StepKind::InstallBackend => vec![
            CommandSpec::new(&toolchain.pip).args(["install", "--upgrade", "pip"]),
            CommandSpec::new(&toolchain.pip).args(["install", "-r"]).arg(&toolchain.requirements),
        ],
        StepKind::BuildFrontend => vec![
            CommandSpec::new(&toolchain.npm).arg("install"),
            CommandSpec::new(&toolchain.npm).args(["run", "build"]),
        ],
        StepKind::Migrate => vec![manage(&["migrate", "--noinput"])],
        StepKind::ProvisionCache => vec![manage(&["createcachetable"])],
        StepKind::CollectStatic => vec![manage(&["collectstatic", "--noinput", "--clear"])],
        StepKind::SelfCheck => vec![manage(&["check", "--deploy"])],
    }
}

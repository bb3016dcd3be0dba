//! Configuration type definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    CommandSpec, DeployEnvironment, StepKind, PRODUCTION_DOMAIN, PRODUCTION_URL,
};
use crate::error::{FlowdeployError, FlowdeployResult};

/// Hostname variable the hosting platform sets for web services
pub const PLATFORM_HOSTNAME_VAR: &str = "RENDER_EXTERNAL_HOSTNAME";

/// Deployment target configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeployConfig {
    /// Production domain exported as PRODUCTION_DOMAIN
    #[serde(default)]
    pub domain: Option<String>,

    /// Production URL exported as PRODUCTION_URL (defaults to https://<domain>)
    #[serde(default)]
    pub url: Option<String>,

    /// Extra variables exported to every step
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// Executables and file names used to build the default step commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    #[serde(default = "default_python")]
    pub python: String,

    #[serde(default = "default_pip")]
    pub pip: String,

    #[serde(default = "default_npm")]
    pub npm: String,

    /// Path to the framework's management script, relative to the project
    #[serde(default = "default_manage")]
    pub manage: String,

    /// Backend dependency manifest
    #[serde(default = "default_requirements")]
    pub requirements: String,

    /// Frontend manifest whose presence enables the frontend build
    #[serde(default = "default_frontend_manifest")]
    pub frontend_manifest: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            pip: default_pip(),
            npm: default_npm(),
            manage: default_manage(),
            requirements: default_requirements(),
            frontend_manifest: default_frontend_manifest(),
        }
    }
}

fn default_python() -> String {
    "python".to_string()
}

fn default_pip() -> String {
    "pip".to_string()
}

fn default_npm() -> String {
    "npm".to_string()
}

fn default_manage() -> String {
    "manage.py".to_string()
}

fn default_requirements() -> String {
    "requirements.txt".to_string()
}

fn default_frontend_manifest() -> String {
    "package.json".to_string()
}

/// Per-step overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StepConfig {
    /// Replaces the step's default commands when set
    #[serde(default)]
    pub commands: Option<Vec<CommandSpec>>,
}

/// Environment preflight configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreflightConfig {
    /// Variables that must be present in the runtime environment
    #[serde(default = "default_required_vars")]
    pub required: Vec<String>,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self {
            required: default_required_vars(),
        }
    }
}

fn default_required_vars() -> Vec<String> {
    ["SECRET_KEY", "ENCRYPTION_SALT", "ALLOWED_HOSTS", "EMAIL_HOST_PASSWORD"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub toolchain: ToolchainConfig,

    /// Keyed by step id (`collect-static`, `collect_static`, ...)
    #[serde(default)]
    pub steps: BTreeMap<String, StepConfig>,

    #[serde(default)]
    pub preflight: PreflightConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Command override for a step, if configured
    pub fn step_commands(&self, kind: StepKind) -> Option<&[CommandSpec]> {
        self.steps
            .iter()
            .find(|(id, _)| StepKind::from_id(id) == Some(kind))
            .and_then(|(_, step)| step.commands.as_deref())
    }

    /// Step ids under `[steps]` that do not name a known step
    pub fn unknown_step_ids(&self) -> Vec<&str> {
        self.steps
            .keys()
            .filter(|id| StepKind::from_id(id).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Resolve the variables exported to every step.
    ///
    /// When `[deploy]` names no domain, an already exported `PRODUCTION_DOMAIN`
    /// is used, then the hosting platform's hostname variable. The URL falls
    /// back to an exported `PRODUCTION_URL`, then to `https://<domain>`.
    pub fn deploy_environment(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> FlowdeployResult<DeployEnvironment> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let domain = present(self.deploy.domain.clone())
            .or_else(|| present(lookup(PRODUCTION_DOMAIN)))
            .or_else(|| present(lookup(PLATFORM_HOSTNAME_VAR)))
            .ok_or(FlowdeployError::MissingDomain)?;

        let url = present(self.deploy.url.clone())
            .or_else(|| present(lookup(PRODUCTION_URL)))
            .unwrap_or_else(|| format!("https://{}", domain));

        let mut env = DeployEnvironment::for_domain(domain, url);
        // domain and url are only set through their dedicated keys; the
        // loader warns about entries that try otherwise
        for (key, value) in &self.deploy.env {
            if key == PRODUCTION_DOMAIN || key == PRODUCTION_URL {
                continue;
            }
            env.set(key.clone(), value.clone());
        }
        Ok(env)
    }
}

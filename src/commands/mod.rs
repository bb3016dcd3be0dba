//! Subcommand implementations
//!
//! Each command returns the process exit code; errors bubble up to `main`
//! which prints them and exits with 1.

pub mod check;
pub mod plan;
pub mod run;
pub mod version;

use std::path::PathBuf;

use anyhow::Result;
use flowdeploy::config::{load_layered, LoadedConfig};
use flowdeploy::FlowdeployError;

use crate::cli::{Cli, ColorWhen};
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
    pub project_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub domain: Option<String>,
    pub url: Option<String>,
}

impl From<&Cli> for GlobalOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            verbose: cli.verbose,
            color: cli.color,
            project_dir: cli.project_dir.clone(),
            config: cli.config.clone(),
            domain: cli.domain.clone(),
            url: cli.url.clone(),
        }
    }
}

/// Project directory, effective config and UI settings for one invocation
pub struct Session {
    pub project_dir: PathBuf,
    pub loaded: LoadedConfig,
    pub ui: UiContext,
}

impl Session {
    pub fn open(global: &GlobalOptions) -> Result<Self> {
        let project_dir = match &global.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        if !project_dir.is_dir() {
            return Err(FlowdeployError::ProjectNotFound { path: project_dir }.into());
        }

        let mut loaded = load_layered(&project_dir, global.config.as_deref())?;
        if let Some(domain) = &global.domain {
            loaded.config.deploy.domain = Some(domain.clone());
        }
        if let Some(url) = &global.url {
            loaded.config.deploy.url = Some(url.clone());
        }

        let ui = UiContext::new(global.json, global.verbose, global.color, &loaded.config);
        print_config_warnings(&loaded.warnings, &ui);

        Ok(Self {
            project_dir,
            loaded,
            ui,
        })
    }
}

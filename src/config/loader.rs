//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{StepKind, PRODUCTION_DOMAIN, PRODUCTION_URL};
use crate::error::{FlowdeployError, FlowdeployResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config, Verbosity};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "flowdeploy.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarningKind {
    /// Key not recognised by any config section
    UnknownKey,
    /// `[deploy.env]` entry shadowing a variable set from `[deploy]`
    ReservedVariable,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub kind: ConfigWarningKind,
    /// Dotted path of the offending key (e.g. `toolchain.pyhton`)
    pub path: String,
    /// Last segment of `path`
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line where the key first appears
    pub line: Option<usize>,
    /// Closest known key, or the `[deploy]` key to use instead
    pub suggestion: Option<String>,
}

/// A loaded configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when built-in defaults were used
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FlowdeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FlowdeployError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(id) = config.unknown_step_ids().first() {
        let known: Vec<&str> = StepKind::ALL.iter().map(|k| k.id()).collect();
        return Err(FlowdeployError::InvalidConfig {
            file: path.to_path_buf(),
            message: format!("unknown step '{}' under [steps]; known steps: {}", id, known.join(", ")),
        });
    }

    if let Some((first, second)) = duplicate_step_ids(&config) {
        return Err(FlowdeployError::InvalidConfig {
            file: path.to_path_buf(),
            message: format!("[steps.{}] and [steps.{}] configure the same step", first, second),
        });
    }

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                kind: ConfigWarningKind::UnknownKey,
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                path: path_str,
                file: path.to_path_buf(),
            }
        })
        .collect();

    for (reserved, replacement) in [(PRODUCTION_DOMAIN, "domain"), (PRODUCTION_URL, "url")] {
        if config.deploy.env.contains_key(reserved) {
            warnings.push(ConfigWarning {
                kind: ConfigWarningKind::ReservedVariable,
                path: format!("deploy.env.{}", reserved),
                key: reserved.to_string(),
                file: path.to_path_buf(),
                line: find_line_number(&content, reserved),
                suggestion: Some(replacement.to_string()),
            });
        }
    }

    Ok((config, warnings))
}

/// Two `[steps]` keys naming the same step, e.g. `collect-static` and `collect_static`
fn duplicate_step_ids(config: &Config) -> Option<(&str, &str)> {
    let ids: Vec<&str> = config.steps.keys().map(String::as_str).collect();
    ids.iter().enumerate().find_map(|(i, first)| {
        let kind = StepKind::from_id(first)?;
        ids[i + 1..]
            .iter()
            .find(|other| StepKind::from_id(other) == Some(kind))
            .map(|second| (*first, *second))
    })
}

/// Resolve the active config file and load it.
///
/// First match wins: explicit path, `<project>/flowdeploy.toml`, the user
/// config, built-in defaults. An explicit path that does not exist is an
/// error; a config that fails to parse is always an error.
pub fn load_layered(project_dir: &Path, explicit: Option<&Path>) -> FlowdeployResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(FlowdeployError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path.to_path_buf())
        }
        None => {
            let project_config = project_dir.join(PROJECT_CONFIG_FILE);
            if project_config.is_file() {
                Some(project_config)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => LoadedConfig::default(),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

/// `<config_dir>/flowdeploy/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("flowdeploy").join("config.toml"))
}

/// Apply environment variable overrides (FLOWDEPLOY_* prefix)
fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides read through `lookup`, writing validation warnings to `writer`
pub fn with_env_overrides_from<W: Write>(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
    writer: &mut W,
) -> Config {
    if let Some(domain) = lookup("FLOWDEPLOY_DOMAIN").filter(|v| !v.is_empty()) {
        config.deploy.domain = Some(domain);
    }

    if let Some(url) = lookup("FLOWDEPLOY_URL").filter(|v| !v.is_empty()) {
        config.deploy.url = Some(url);
    }

    if let Some(python) = lookup("FLOWDEPLOY_PYTHON").filter(|v| !v.is_empty()) {
        config.toolchain.python = python;
    }

    if let Some(npm) = lookup("FLOWDEPLOY_NPM").filter(|v| !v.is_empty()) {
        config.toolchain.npm = npm;
    }

    if let Some(verbosity) = lookup("FLOWDEPLOY_VERBOSITY") {
        let validator = EnvVarValidator::new(
            "FLOWDEPLOY_VERBOSITY",
            &["quiet", "normal", "verbose", "debug"],
        );
        config.output.verbosity = validator.parse_with_writer(
            &verbosity,
            |s| match s.to_lowercase().as_str() {
                "quiet" => Some(Verbosity::Quiet),
                "normal" => Some(Verbosity::Normal),
                "verbose" => Some(Verbosity::Verbose),
                "debug" => Some(Verbosity::Debug),
                _ => None,
            },
            config.output.verbosity,
            writer,
        );
    }

    if let Some(color) = lookup("FLOWDEPLOY_COLOR") {
        let validator = EnvVarValidator::new("FLOWDEPLOY_COLOR", &["auto", "always", "never"]);
        config.output.color = validator.parse_with_writer(
            &color,
            |s| match s.to_lowercase().as_str() {
                "auto" => Some(ColorMode::Auto),
                "always" => Some(ColorMode::Always),
                "never" => Some(ColorMode::Never),
                _ => None,
            },
            config.output.color,
            writer,
        );
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy",
        "domain",
        "url",
        "env",
        "toolchain",
        "python",
        "pip",
        "npm",
        "manage",
        "requirements",
        "frontend_manifest",
        "steps",
        "commands",
        "program",
        "args",
        "preflight",
        "required",
        "output",
        "verbosity",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

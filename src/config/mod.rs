//! Configuration module for flowdeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FLOWDEPLOY_*)
//! 3. Project config (<project>/flowdeploy.toml)
//! 4. User config (<config_dir>/flowdeploy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    load_layered, user_config_path, with_env_overrides_from, ConfigWarning, ConfigWarningKind,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{
    ColorMode, Config, DeployConfig, OutputConfig, PreflightConfig, StepConfig, ToolchainConfig,
    Verbosity, PLATFORM_HOSTNAME_VAR,
};

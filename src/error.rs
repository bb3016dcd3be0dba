//! Error types for flowdeploy
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for flowdeploy operations
pub type FlowdeployResult<T> = Result<T, FlowdeployError>;

/// Errors that stop a run before (or instead of) executing steps
#[derive(Error, Debug)]
pub enum FlowdeployError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Explicitly requested config file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// No production domain could be resolved
    #[error(
        "no production domain configured - pass --domain, set FLOWDEPLOY_DOMAIN \
         or PRODUCTION_DOMAIN, or add `domain` under [deploy] in flowdeploy.toml"
    )]
    MissingDomain,

    /// Project directory does not exist
    #[error("project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// Another sequencer run holds the project lock
    #[error("another deployment is already running in this project (lock: {lock})")]
    AlreadyRunning { lock: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

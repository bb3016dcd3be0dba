//! Failure policy and failure taxonomy for sequence steps

use serde::{Deserialize, Serialize};

/// How the sequencer reacts when a step fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole sequence; no later step runs
    Fatal,
    /// Record a warning and continue
    Warn,
}

impl FailurePolicy {
    pub fn is_fatal(&self) -> bool {
        matches!(self, FailurePolicy::Fatal)
    }
}

/// What kind of failure a step failure represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureCategory {
    DependencyInstall,
    AssetBuild,
    Migration,
    CacheProvisioning,
    StaticCollection,
    ReadinessCheck,
}

impl FailureCategory {
    pub fn description(&self) -> &'static str {
        match self {
            FailureCategory::DependencyInstall => "dependency installation failed",
            FailureCategory::AssetBuild => "frontend asset build failed",
            FailureCategory::Migration => "database migration failed",
            FailureCategory::CacheProvisioning => "cache table provisioning failed",
            FailureCategory::StaticCollection => "static file collection failed",
            FailureCategory::ReadinessCheck => "deployment readiness check failed",
        }
    }
}

impl std::fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

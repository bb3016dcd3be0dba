//! Step kind value object - the fixed steps of a deployment sequence

use serde::{Deserialize, Serialize};

use super::{FailureCategory, FailurePolicy};

/// One step of the deployment sequence.
///
/// Variants are declared in execution order; `Ord` follows that order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    /// Upgrade the package manager and install backend dependencies
    InstallBackend,
    /// Install frontend dependencies and run the production asset build
    BuildFrontend,
    /// Apply pending database schema migrations
    Migrate,
    /// Create the database-backed cache table if absent
    ProvisionCache,
    /// Collect static assets into the serving directory
    CollectStatic,
    /// Deployment-readiness self-check
    SelfCheck,
}

impl StepKind {
    /// Every step, in execution order
    pub const ALL: [StepKind; 6] = [
        StepKind::InstallBackend,
        StepKind::BuildFrontend,
        StepKind::Migrate,
        StepKind::ProvisionCache,
        StepKind::CollectStatic,
        StepKind::SelfCheck,
    ];

    /// Stable identifier used in config files, CLI flags and JSON events
    pub fn id(&self) -> &'static str {
        match self {
            StepKind::InstallBackend => "install-backend",
            StepKind::BuildFrontend => "build-frontend",
            StepKind::Migrate => "migrate",
            StepKind::ProvisionCache => "provision-cache",
            StepKind::CollectStatic => "collect-static",
            StepKind::SelfCheck => "self-check",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let normalized = id.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|kind| kind.id() == normalized)
    }

    /// Human-readable announcement title
    pub fn title(&self) -> &'static str {
        match self {
            StepKind::InstallBackend => "Installing backend dependencies",
            StepKind::BuildFrontend => "Building frontend assets",
            StepKind::Migrate => "Applying database migrations",
            StepKind::ProvisionCache => "Provisioning cache table",
            StepKind::CollectStatic => "Collecting static files",
            StepKind::SelfCheck => "Running deployment checks",
        }
    }

    pub fn category(&self) -> FailureCategory {
        match self {
            StepKind::InstallBackend => FailureCategory::DependencyInstall,
            StepKind::BuildFrontend => FailureCategory::AssetBuild,
            StepKind::Migrate => FailureCategory::Migration,
            StepKind::ProvisionCache => FailureCategory::CacheProvisioning,
            StepKind::CollectStatic => FailureCategory::StaticCollection,
            StepKind::SelfCheck => FailureCategory::ReadinessCheck,
        }
    }

    /// What a failure of this step does to the rest of the sequence.
    ///
    /// The readiness self-check is the only step whose failure is tolerated.
    pub fn policy(&self) -> FailurePolicy {
        match self {
            StepKind::SelfCheck => FailurePolicy::Warn,
            _ => FailurePolicy::Fatal,
        }
    }

    /// 1-based position in the sequence
    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|kind| kind == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

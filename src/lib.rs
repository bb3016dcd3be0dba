//! flowdeploy - deployment step sequencer
//!
//! Runs the fixed release sequence for a web application on a hosting
//! platform: backend dependencies, optional frontend build, schema
//! migration, cache table provisioning, static file collection and a
//! non-fatal readiness check. Every step runs as a subprocess with the
//! production domain and URL exported to it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{SequenceOptions, SequenceResult, SequenceUseCase, StepOutcome};
pub use config::{Config, LoadedConfig};
pub use domain::entities::{PlannedStep, SequencePlan};
pub use domain::services::{check_environment, Planner, PreflightReport};
pub use domain::value_objects::{CommandSpec, DeployEnvironment, StepKind};
pub use error::{FlowdeployError, FlowdeployResult};
pub use infrastructure::{JsonEventSink, LocalFs, ProcessRunner, RunLock};

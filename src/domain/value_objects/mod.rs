//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod command;
mod environment;
mod failure_policy;
mod step_kind;

pub use command::CommandSpec;
pub use environment::{DeployEnvironment, PRODUCTION_DOMAIN, PRODUCTION_URL};
pub use failure_policy::{FailureCategory, FailurePolicy};
pub use step_kind::StepKind;

//! Domain Services
//!
//! Stateless logic over domain types: plan resolution and environment checks.

pub mod planner;
pub mod preflight;

pub use planner::{default_commands, Planner, OPERATOR_SKIP_REASON};
pub use preflight::{check_environment, CheckStatus, PreflightItem, PreflightReport};

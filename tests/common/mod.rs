//! Common test utilities for flowdeploy CLI tests.
//!
//! - `TestEnv`: isolated project and home directories plus a runner for the binary
//! - Assertion macros: `assert_output_contains!`, `assert_step_log!`
//! - Fixtures: config snippets whose steps are small shell scripts

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;

//! Application Layer
//!
//! Use cases that orchestrate domain services and ports.

pub mod sequence;

pub use sequence::{SequenceOptions, SequenceResult, SequenceUseCase, StepOutcome, StepRecord};

//! Sequence Use Case Module

mod options;
mod result;
mod use_case;

pub use options::SequenceOptions;
pub use result::{SequenceResult, StepOutcome, StepRecord};
pub use use_case::SequenceUseCase;

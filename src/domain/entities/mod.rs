//! Domain Entities

mod plan;

pub use plan::{PlannedStep, SequencePlan, StepDisposition};

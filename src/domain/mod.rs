//! Domain Layer
//!
//! The sequencer's core: the step catalogue, failure policies, plans, and
//! the ports through which steps touch the outside world.
//!
//! ## Structure
//!
//! - `value_objects/` - StepKind, FailurePolicy, CommandSpec, DeployEnvironment
//! - `entities/` - SequencePlan and its PlannedStep entries
//! - `services/` - Planner, environment preflight
//! - `ports/` - CommandRunner, FileSystem, SequenceEventSink
//!
//! Nothing here spawns processes; all execution goes through `ports`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod file_system;
pub mod sequence_events;

pub use command_runner::{
    CommandContext, CommandRunner, CommandStatus, OutputMode, RunResult, RunnerError,
    SIGNALLED_EXIT_CODE, SPAWN_FAILURE_EXIT_CODE,
};
pub use file_system::FileSystem;
pub use sequence_events::{NoopEventSink, SequenceEvent, SequenceEventSink};

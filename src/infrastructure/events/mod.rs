//! Event Sink Implementations
//!
//! Concrete implementations of SequenceEventSink that live outside the UI.
//! The console step log is in `ui::views::sequence`.

mod json;

pub use json::JsonEventSink;

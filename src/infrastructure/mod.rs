//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - Subprocess runner
//! - `fs/` - File system implementations
//! - `events/` - Machine-readable event sinks
//! - `lock` - Per-project run lock

pub mod events;
pub mod fs;
pub mod lock;
pub mod process;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use lock::{RunLock, LOCK_FILE};
pub use process::ProcessRunner;

//! FileSystem port - the file probes the planner needs
//!
//! Keeps planning free of direct disk access so it can be exercised
//! against an in-memory tree.

use std::path::Path;

/// Read-only view of the project tree
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - in-memory fakes in tests
pub trait FileSystem {
    /// Whether `path` exists and is a regular file
    fn is_file(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }
}

//! Local File System Implementation
//!
//! Implements the FileSystem port for the local disk.

use std::path::Path;

use crate::domain::ports::FileSystem;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn is_file_distinguishes_files_and_directories() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::create_dir(dir.path().join("static")).unwrap();

        assert!(LocalFs.is_file(&dir.path().join("package.json")));
        assert!(!LocalFs.is_file(&dir.path().join("static")));
        assert!(!LocalFs.is_file(&dir.path().join("missing.json")));
    }
}

//! Project run lock
//!
//! Holds an exclusive advisory lock on `<project>/.flowdeploy.lock` for the
//! lifetime of a run so two sequencers never interleave steps in one
//! project. The file itself is left in place; only the lock is released.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{FlowdeployError, FlowdeployResult};

/// Lock file name inside the project directory
pub const LOCK_FILE: &str = ".flowdeploy.lock";

/// An acquired run lock; released on drop
#[derive(Debug)]
pub struct RunLock {
    file: File,
    path: PathBuf,
}

impl RunLock {
    /// Take the lock without blocking.
    ///
    /// Fails with `AlreadyRunning` when another process holds it.
    pub fn acquire(project_dir: &Path) -> FlowdeployResult<Self> {
        let path = project_dir.join(LOCK_FILE);
        let file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self { file, path }),
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(FlowdeployError::AlreadyRunning { lock: path })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

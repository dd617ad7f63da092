//! Fixtures shared by the integration tests

use promptlog::SqliteStorage;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scratch directory for the files one test writes, removed on drop
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("scratch dir"),
        }
    }

    /// Path of `name` inside the scratch directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Open (and initialise) `prompts.db` in the scratch directory
    pub fn storage(&self) -> SqliteStorage {
        SqliteStorage::new_with_path(self.path("prompts.db")).expect("open scratch database")
    }

    /// Write `contents` to `name` and return its path
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("write scratch file");
        path
    }
}

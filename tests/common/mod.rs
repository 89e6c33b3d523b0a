//! Common test utilities for ygit integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch area standing in for the "remote" filesystem
#[allow(dead_code)]
pub struct TestRemote {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the scratch root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestRemote {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// URL for a repository under the scratch root
    pub fn url(&self, name: &str) -> String {
        self.path.join(name).display().to_string()
    }

    /// Create a directory under the scratch root
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let dir = self.path.join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Initialize a local (non-bare) git repository under the scratch root
    pub fn init_local_repo(&self, name: &str) -> PathBuf {
        let dir = self.create_dir(name);
        git2::Repository::init(&dir).expect("Failed to init repository");
        dir
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path.join(name).exists()
    }
}

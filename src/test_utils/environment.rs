//! Temporary project directories for tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::ManifestFixture;
use crate::constants::DEFAULT_MANIFEST_FILE;

/// A temporary project directory, removed on drop.
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp directory")?;
        Ok(Self {
            temp_dir,
        })
    }

    /// Create an environment with `fixture` written as `scriptseq.toml`.
    pub fn with_manifest(fixture: &ManifestFixture) -> Result<Self> {
        let env = Self::new()?;
        fixture.write_to(env.project_path())?;
        Ok(env)
    }

    pub fn project_path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.project_path().join(DEFAULT_MANIFEST_FILE)
    }

    /// Write a file relative to the project, creating parent directories.
    pub fn create_file(&self, path: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let full_path = self.project_path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;
        Ok(full_path)
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let full_path = self.project_path().join(path);
        fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read {}", full_path.display()))
    }

    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        self.project_path().join(path).exists()
    }
}

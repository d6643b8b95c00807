//! Temporary configuration files for tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A configuration file written into a per-test temporary directory.
///
/// The directory and everything in it are removed when the guard is dropped.
pub struct ConfigFileGuard {
  pub temp_dir: TempDir,
  config_path: PathBuf,
}

impl ConfigFileGuard {
  /// Write `content` to `config.toml` inside a fresh temporary directory
  pub fn new(content: &str) -> Self {
    let guard = Self::empty();
    fs::write(&guard.config_path, content).expect("Failed to write test config file");
    guard
  }

  /// Create the temporary directory without writing a configuration file
  pub fn empty() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_path = temp_dir.path().join("config.toml");
    Self { temp_dir, config_path }
  }

  /// Path of the temporary directory
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Path of the configuration file
  pub fn config_path(&self) -> &Path {
    &self.config_path
  }

  /// Write an additional file next to the configuration and return its path
  pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
    let path = self.temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
  }
}

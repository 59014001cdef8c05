//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for stores, registries and
//! configuration files.

use std::fs;
use std::path::PathBuf;

use runconf::{ConfigStore, Registry};
use tempfile::TempDir;

/// The registry used throughout the examples: a required `port`, optional
/// `host`, `timeout` and `ratio`, and the flags `verbose` and `dry-run`.
#[allow(dead_code)]
pub fn sample_registry() -> Registry {
    let mut registry = Registry::new();
    registry.add_parameter("port", true).unwrap();
    registry.add_parameter("host", false).unwrap();
    registry.add_parameter("timeout", false).unwrap();
    registry.add_parameter("ratio", false).unwrap();
    registry.add_flag("verbose").unwrap();
    registry.add_flag("dry-run").unwrap();
    registry
}

/// A fresh, unlocked store over [`sample_registry`].
#[allow(dead_code)]
pub fn sample_store() -> ConfigStore {
    ConfigStore::with_registry(sample_registry())
}

/// A temporary directory holding configuration files.
///
/// The directory is removed when the fixture is dropped.
#[allow(dead_code)]
pub struct ConfigDir {
    dir: TempDir,
}

#[allow(dead_code)]
impl ConfigDir {
    /// Create an empty fixture directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write `contents` to `name` inside the directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    /// Path of a file that does not exist.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

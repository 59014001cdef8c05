//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated directory for registry declarations and
//! configuration files, and command builders for the `runconf` binary.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Registry used by most tests: required `port`, optional `host` and
/// `ratio`, flag `verbose`.
pub const SAMPLE_SCHEMA: &str = "\
parameters:
  - name: port
    required: true
  - host
  - ratio
flags:
  - verbose
";

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the sample registry declaration
    pub schema: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new environment with [`SAMPLE_SCHEMA`] written to disk.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let schema = temp_path.join("registry.yaml");
        std::fs::write(&schema, SAMPLE_SCHEMA).expect("Failed to write schema");

        Self {
            temp_dir,
            temp_path,
            schema,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("runconf").expect("Failed to find runconf binary");
        cmd.env_remove("RUNCONF_SCHEMA").env_remove("RUNCONF_LOG_MODE");
        cmd
    }

    /// Get a command builder for `subcommand` with `--schema` pre-configured.
    pub fn command(&self, subcommand: &str) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg(subcommand).arg("--schema").arg(&self.schema);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file into the environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

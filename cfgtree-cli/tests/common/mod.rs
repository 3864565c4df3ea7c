//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Assertion helpers for common checks

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated configuration file.
///
/// The configuration file lives in a nested directory that does not exist
/// yet, so tests also cover directory creation on first write.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the configuration file
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_path = temp_path.join("settings").join("config.xml");

        Self {
            temp_dir,
            temp_path,
            config_path,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Environment variables that would change behavior are cleared, and
    /// HOME points into the temp dir so nothing escapes the test.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("cfgtree").expect("Failed to find cfgtree binary");
        cmd.env_remove("CFGTREE_CONFIG")
            .env_remove("CFGTREE_LOG_MODE")
            .env_remove("CFGTREE_OUTPUT_FORMAT")
            .env("HOME", &self.temp_path);
        cmd
    }

    /// Get a command builder with the configuration file pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write raw contents to the configuration file, creating its directory.
    pub fn write_config(&self, contents: &str) {
        let dir = self.config_path.parent().expect("config path has a parent");
        std::fs::create_dir_all(dir).expect("Failed to create config directory");
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
    }

    /// Read the configuration file back.
    pub fn read_config(&self) -> String {
        std::fs::read_to_string(&self.config_path).expect("Failed to read config")
    }

    /// Store a value, asserting success.
    pub fn set(&self, path: &str, value: &str) {
        self.command().arg("set").arg(path).arg(value).assert().success();
    }

    /// Fetch a value and return stdout with the trailing newline removed.
    ///
    /// # Panics
    /// Panics if the get command fails.
    pub fn get(&self, path: &str) -> String {
        let output = self
            .command()
            .arg("get")
            .arg(path)
            .output()
            .expect("Failed to run get command");

        assert!(
            output.status.success(),
            "Get failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout.trim_end_matches('\n').to_string()
    }

    /// List entries and return stdout.
    pub fn list(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("list")
            .args(args)
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

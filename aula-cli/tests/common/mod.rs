//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers for common patterns
//! - Catalog file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// Pointing HOME at a fresh temporary directory keeps the per-user room
/// catalog out of the picture, so tests see either the built-in rooms or
/// exactly the catalog file they provide.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a bare command builder without any environment scrubbing.
    ///
    /// Use this when a test needs to control the full environment itself.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("aula").expect("Failed to find aula binary")
    }

    /// Get a command builder with a hermetic environment.
    ///
    /// This returns a Command with:
    /// - HOME pointed at this environment's temporary directory
    /// - AULA_ROOMS and AULA_LOG_MODE removed
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("HOME", &self.temp_path);
        cmd.env_remove("AULA_ROOMS");
        cmd.env_remove("AULA_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a room catalog file into the test environment.
    ///
    /// Returns the path to the created file.
    pub fn write_rooms(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, content).expect("Failed to write catalog file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// A catalog file with a single lecture room named "Sala Verde".
#[allow(dead_code)]
pub const ONE_ROOM_CATALOG: &str = "rooms:\n  - name: Sala Verde\n    room_type: lecture\n";

/// A catalog file with a single laboratory named "Sala Roja".
#[allow(dead_code)]
pub const OTHER_ROOM_CATALOG: &str = "rooms:\n  - name: Sala Roja\n    room_type: laboratory\n";

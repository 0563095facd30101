//! Common test utilities for todo CLI integration tests.
//!
//! Provides `TestEnv` for isolated test environments that never touch a
//! `todo.db` in the real working directory.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
pub use tempfile::TempDir;

/// A test environment with an isolated working directory and database.
///
/// The `todo()` method returns a `Command` that sets `TODO_DB` per-invocation,
/// making tests parallel-safe.
pub struct TestEnv {
    pub work_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an empty working directory.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the todo binary pointed at this environment's database.
    pub fn todo(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_todo"));
        cmd.current_dir(self.work_dir.path());
        cmd.env("TODO_DB", self.db_path());
        cmd.env_remove("TODO_LOG");
        cmd
    }

    /// Add a task and return the id printed by the CLI.
    pub fn add(&self, task: &str) -> i64 {
        let output = self.todo().args(["add", task]).output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        stdout
            .trim()
            .rsplit(' ')
            .next()
            .and_then(|id| id.parse().ok())
            .unwrap()
    }

    /// Path of the database file.
    pub fn db_path(&self) -> PathBuf {
        self.work_dir.path().join("todo.db")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

//! Shared helpers for SchoolDesk CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment with its own `$HOME`, so a developer's real
/// `~/.schooldesk/schooldesk.toml` never leaks into test runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the `schooldesk` binary with an isolated environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("schooldesk").expect("Failed to locate schooldesk binary");
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env_remove("SCHOOLDESK_CONFIG")
            .env_remove("SCHOOLDESK_KNOWLEDGE_BASE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the temp root and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, content).expect("write test file");
        path
    }

    /// Write `~/.schooldesk/schooldesk.toml`.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        self.write_file(".schooldesk/schooldesk.toml", content)
    }
}

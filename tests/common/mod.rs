//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Scratch source tree for build and extraction tests
pub struct TestRepo {
    /// Temporary directory holding the tree
    pub dir: TempDir,
}

impl TestRepo {
    /// Create an empty scratch tree
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the tree root
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the tree
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Install a stub `gradlew` into `module` that appends
    /// "<module> <task>" to `log` and exits with `exit_code`.
    #[cfg(unix)]
    pub fn install_stub_gradlew(&self, module: &str, log: &Path, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;

        let dir = self.dir.path().join(module);
        std::fs::create_dir_all(&dir).expect("Failed to create module directory");

        let script = format!(
            "#!/bin/sh\necho \"{module} $1\" >> \"{log}\"\nexit {exit_code}\n",
            log = log.display(),
        );
        let path = dir.join("gradlew");
        std::fs::write(&path, script).expect("Failed to write stub gradlew");

        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat stub gradlew")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod stub gradlew");
    }

    /// Turn the tree into a git repository with a single commit on
    /// `branch`. Requires the git binary.
    pub fn commit_all(&self, branch: &str) {
        git(&["init", "-q", "-b", branch, "."], self.dir.path());
        git(&["add", "-A"], self.dir.path());
        git(
            &[
                "-c",
                "user.name=test",
                "-c",
                "user.email=test@example.org",
                "commit",
                "-q",
                "-m",
                "initial",
            ],
            self.dir.path(),
        );
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the git binary is available on this machine
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn git(args: &[&str], cwd: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to run git");
    assert!(output.status.success(), "git {args:?} failed");
}

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const COPYRIGHT: &str = "Copyright Contributors to the cpackget project.";
pub const LICENSE: &str = "SPDX-License-Identifier: Apache-2.0";

/// Creates an `assert_cmd` Command for the notice-guard binary.
#[macro_export]
macro_rules! notice_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("notice-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, returning its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        self.create_bytes(relative_path, content.as_bytes())
    }

    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Go source with both notices in `//` comments.
    pub fn create_licensed_go(&self, relative_path: &str) -> PathBuf {
        self.create_file(
            relative_path,
            &format!("// {LICENSE}\n// {COPYRIGHT}\n\npackage main\n\nfunc main() {{}}\n"),
        )
    }

    /// Go source with no header at all.
    pub fn create_unlicensed_go(&self, relative_path: &str) -> PathBuf {
        self.create_file(relative_path, "package main\n\nfunc main() {}\n")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

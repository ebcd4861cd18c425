//! Shared harness for rolo integration tests.
//!
//! Builds an isolated workspace plus local git "origin" repositories, so role
//! clones and pulls exercise real transport against the filesystem.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub struct TestContext {
    root: TempDir,
    workspace: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp directory for tests");
        let workspace = root.path().join("workspace");
        fs::create_dir_all(&workspace).expect("failed to create workspace directory");
        Self { root, workspace }
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Create a local origin repository with an initial commit and return a
    /// URL usable as a clone source.
    pub fn make_origin(&self, name: &str) -> String {
        let dir = self.root.path().join("origins").join(name);
        fs::create_dir_all(&dir).expect("failed to create origin directory");

        git(&dir, &["init", "--initial-branch=main"]);
        git(&dir, &["config", "user.name", "Test User"]);
        git(&dir, &["config", "user.email", "test@example.com"]);
        // Accept pushes into this non-bare origin.
        git(&dir, &["config", "receive.denyCurrentBranch", "ignore"]);

        fs::write(dir.join("README.md"), format!("# {name}\n")).expect("failed to seed origin");
        git(&dir, &["add", "-A"]);
        git(&dir, &["commit", "-m", "initial commit"]);

        dir.to_string_lossy().to_string()
    }

    /// Add a commit to an existing origin.
    pub fn commit_to_origin(&self, name: &str, file: &str, content: &str) {
        let dir = self.root.path().join("origins").join(name);
        fs::write(dir.join(file), content).expect("failed to write origin file");
        git(&dir, &["add", "-A"]);
        git(&dir, &["commit", "-m", "update"]);
    }
}

pub fn git(cwd: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, RepoStatus};
use crate::ports::Vcs;

/// Scriptable in-memory VCS. "Cloning" creates a real directory so filesystem
/// assertions hold; failures are keyed by repo URL or working copy path.
#[derive(Default)]
pub struct FakeVcs {
    pub cloned: Mutex<Vec<(String, PathBuf)>>,
    pub pulled: Mutex<Vec<PathBuf>>,
    pub pushed: Mutex<Vec<PathBuf>>,
    pub committed: Mutex<Vec<(PathBuf, String)>>,
    fail_clone: Mutex<HashSet<String>>,
    fail_pull: Mutex<HashSet<PathBuf>>,
    dirty: Mutex<HashSet<PathBuf>>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script clone failures for a repo URL.
    pub fn fail_clone_for(&self, repo_url: &str) {
        self.fail_clone.lock().unwrap().insert(repo_url.to_string());
    }

    /// Script pull failures for a working copy path.
    pub fn fail_pull_for(&self, directory: PathBuf) {
        self.fail_pull.lock().unwrap().insert(directory);
    }

    pub fn mark_dirty(&self, directory: PathBuf) {
        self.dirty.lock().unwrap().insert(directory);
    }

    pub fn pulled(&self) -> Vec<PathBuf> {
        self.pulled.lock().unwrap().clone()
    }
}

impl Vcs for FakeVcs {
    fn clone_repo(
        &self,
        repo_url: &str,
        directory: &Path,
        _branch: Option<&str>,
    ) -> Result<(), AppError> {
        if directory.exists() {
            return Err(AppError::DestinationExists(directory.to_path_buf()));
        }
        if self.fail_clone.lock().unwrap().contains(repo_url) {
            return Err(AppError::CloneFailed {
                repo_url: repo_url.to_string(),
                details: "scripted failure".to_string(),
            });
        }
        fs::create_dir_all(directory)?;
        self.cloned.lock().unwrap().push((repo_url.to_string(), directory.to_path_buf()));
        Ok(())
    }

    fn pull(&self, directory: &Path) -> Result<(), AppError> {
        if !directory.is_dir() {
            return Err(AppError::NotARepository(directory.to_path_buf()));
        }
        if self.fail_pull.lock().unwrap().contains(directory) {
            return Err(AppError::PullFailed {
                directory: directory.to_path_buf(),
                details: "scripted failure".to_string(),
            });
        }
        self.pulled.lock().unwrap().push(directory.to_path_buf());
        Ok(())
    }

    fn push(&self, directory: &Path) -> Result<(), AppError> {
        if !directory.is_dir() {
            return Err(AppError::NotARepository(directory.to_path_buf()));
        }
        self.pushed.lock().unwrap().push(directory.to_path_buf());
        Ok(())
    }

    fn commit(&self, directory: &Path, message: &str) -> Result<(), AppError> {
        if !directory.is_dir() {
            return Err(AppError::NotARepository(directory.to_path_buf()));
        }
        self.committed.lock().unwrap().push((directory.to_path_buf(), message.to_string()));
        Ok(())
    }

    fn status(&self, directory: &Path) -> Result<RepoStatus, AppError> {
        if !directory.is_dir() {
            return Err(AppError::NotARepository(directory.to_path_buf()));
        }
        if self.dirty.lock().unwrap().contains(directory) {
            Ok(RepoStatus::Dirty)
        } else {
            Ok(RepoStatus::Clean)
        }
    }
}

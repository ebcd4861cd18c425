use std::fs;
use std::path::Path;
use std::process::Command;

use git2::{Repository, StatusOptions};

use crate::domain::{AppError, RepoStatus};
use crate::ports::Vcs;

/// Git adapter: `git2` for repository inspection, the `git` binary for
/// transport (clone, pull, push).
#[derive(Debug, Clone, Copy, Default)]
pub struct GitVcs;

impl GitVcs {
    pub fn new() -> Self {
        Self
    }

    fn open(directory: &Path) -> Result<Repository, AppError> {
        Repository::open(directory).map_err(|_| AppError::NotARepository(directory.to_path_buf()))
    }

    /// Run a git subcommand, returning trimmed stderr as the error detail.
    fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<(), String> {
        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        let output = command.output().map_err(|e| e.to_string())?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(if stderr.is_empty() { "unknown git error".to_string() } else { stderr });
        }
        Ok(())
    }
}

impl Vcs for GitVcs {
    fn clone_repo(
        &self,
        repo_url: &str,
        directory: &Path,
        branch: Option<&str>,
    ) -> Result<(), AppError> {
        if directory.exists() {
            return Err(AppError::DestinationExists(directory.to_path_buf()));
        }
        if let Some(parent) = directory.parent() {
            fs::create_dir_all(parent)?;
        }

        let target = directory.to_string_lossy();
        Self::run_git(&["clone", repo_url, target.as_ref()], None).map_err(|details| {
            AppError::CloneFailed { repo_url: repo_url.to_string(), details }
        })?;

        if let Some(branch) = branch {
            if let Err(details) = Self::run_git(&["checkout", branch], Some(directory)) {
                // Roll the clone back so a failed checkout never leaves a
                // half-initialized working copy at the destination.
                let _ = fs::remove_dir_all(directory);
                return Err(AppError::CloneFailed { repo_url: repo_url.to_string(), details });
            }
        }
        Ok(())
    }

    fn pull(&self, directory: &Path) -> Result<(), AppError> {
        Self::open(directory)?;
        Self::run_git(&["pull", "--ff-only"], Some(directory)).map_err(|details| {
            AppError::PullFailed { directory: directory.to_path_buf(), details }
        })
    }

    fn push(&self, directory: &Path) -> Result<(), AppError> {
        Self::open(directory)?;
        Self::run_git(&["push"], Some(directory)).map_err(|details| AppError::PushFailed {
            directory: directory.to_path_buf(),
            details,
        })
    }

    fn commit(&self, directory: &Path, message: &str) -> Result<(), AppError> {
        Self::open(directory)?;
        let stage_and_commit = Self::run_git(&["add", "-A"], Some(directory))
            .and_then(|()| Self::run_git(&["commit", "-m", message], Some(directory)));
        stage_and_commit.map_err(|details| AppError::CommitFailed {
            directory: directory.to_path_buf(),
            details,
        })
    }

    fn status(&self, directory: &Path) -> Result<RepoStatus, AppError> {
        let repo = Self::open(directory)?;
        let mut options = StatusOptions::new();
        options.include_untracked(true).include_ignored(false);
        let statuses = repo.statuses(Some(&mut options)).map_err(|e| AppError::GitError {
            command: "git2::Repository::statuses".to_string(),
            details: e.to_string(),
        })?;
        if statuses.is_empty() { Ok(RepoStatus::Clean) } else { Ok(RepoStatus::Dirty) }
    }
}

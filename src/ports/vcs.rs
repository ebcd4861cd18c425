use std::path::Path;

use crate::domain::{AppError, RepoStatus};

/// Version-control operations over working copies.
pub trait Vcs {
    /// Clone `repo_url` into `directory`, creating parent directories as
    /// needed. Fails with `DestinationExists` when `directory` is already
    /// present (a populated path is never silently reused). When `branch` is
    /// given it is checked out after the clone; a failed checkout leaves no
    /// partial clone behind.
    fn clone_repo(
        &self,
        repo_url: &str,
        directory: &Path,
        branch: Option<&str>,
    ) -> Result<(), AppError>;

    /// Update the working copy from its origin. Fails with `NotARepository`
    /// when `directory` is not a working copy, `PullFailed` on conflict or
    /// transport error.
    fn pull(&self, directory: &Path) -> Result<(), AppError>;

    /// Push the current branch to origin.
    fn push(&self, directory: &Path) -> Result<(), AppError>;

    /// Stage all changes and commit them with `message`.
    fn commit(&self, directory: &Path, message: &str) -> Result<(), AppError>;

    /// Dirty when the working copy has tracked modifications, staged changes,
    /// or untracked files.
    fn status(&self, directory: &Path) -> Result<RepoStatus, AppError>;
}

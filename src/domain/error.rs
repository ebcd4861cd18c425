use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for rolo operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Registry backing store failure.
    #[error("Registry error: {0}")]
    Registry(#[from] rusqlite::Error),

    /// Registry uniqueness violated (name or directory already registered).
    #[error("Duplicate {what} '{name}': name or directory already registered")]
    DuplicateKey { what: &'static str, name: String },

    /// Clone target already populated.
    #[error("Clone destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    /// VCS operation attempted on a directory that is not a working copy.
    #[error("Not a repository: {}", .0.display())]
    NotARepository(PathBuf),

    /// Clone failed for transport, auth, or repository reasons.
    #[error("Failed to clone repository '{repo_url}': {details}")]
    CloneFailed { repo_url: String, details: String },

    #[error("Failed to pull repository at {}: {details}", directory.display())]
    PullFailed { directory: PathBuf, details: String },

    #[error("Failed to push repository at {}: {details}", directory.display())]
    PushFailed { directory: PathBuf, details: String },

    #[error("Failed to commit repository at {}: {details}", directory.display())]
    CommitFailed { directory: PathBuf, details: String },

    /// Git inspection failed for a reason other than a missing repository.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Role or project name is invalid.
    #[error(
        "Invalid name '{0}': must be non-empty and contain only alphanumerics, spaces, '-' or '_'"
    )]
    InvalidName(String),

    #[error("Role '{0}' not found in registry")]
    RoleNotFound(String),

    #[error("Project '{0}' not found in registry")]
    ProjectNotFound(String),

    /// A single-role update failed; the underlying VCS failure is attached.
    #[error("Failed to update role '{name}': {source}")]
    RoleUpdateFailed {
        name: String,
        #[source]
        source: Box<AppError>,
    },

    /// The registry row is already gone when this is raised; re-running the
    /// remove operation retries only the directory deletion.
    #[error("Failed to remove directory for '{name}' ({}): {details}", directory.display())]
    DirectoryRemovalFailed {
        name: String,
        directory: PathBuf,
        details: String,
    },

    /// Operation attempted before `initialize`.
    #[error("Project not initialized at {}: run initialize first", .0.display())]
    ProjectNotInitialized(PathBuf),

    /// Scaffold template could not be parsed.
    #[error("Failed to parse scaffold template: {0}")]
    TemplateParse(#[from] serde_yaml::Error),

    /// Workspace settings file could not be parsed.
    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// Workspace settings could not be encoded.
    #[error("Failed to encode settings: {0}")]
    SettingsEncode(#[from] toml::ser::Error),
}

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::AppError;

/// A validated role (or project) name.
///
/// Guarantees:
/// - Non-empty after trimming surrounding whitespace
/// - Contains only alphanumeric characters, spaces, `-`, or `_`
///
/// The name is the registry key; the on-disk directory uses [`RoleName::slug`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidName(raw.to_string()));
        }
        let valid = trimmed
            .chars()
            .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');
        if !valid {
            return Err(AppError::InvalidName(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical directory slug: lowercase with spaces replaced by underscores.
    pub fn slug(&self) -> String {
        self.0.to_lowercase().replace(' ', "_")
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RoleName> for String {
    fn from(val: RoleName) -> Self {
        val.0
    }
}

/// A role registry row.
///
/// A row is only written after the working copy exists on disk; a row without
/// a directory is an inconsistency to be repaired by removal or re-clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    pub directory: PathBuf,
    /// May be empty for a local-only role.
    pub repo_url: String,
    pub active: bool,
}

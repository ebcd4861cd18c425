use super::AppError;

/// Cleanliness of a working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoStatus {
    Clean,
    /// Uncommitted tracked modifications, staged changes, or untracked files.
    Dirty,
}

/// Partition of registered role names by working copy status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusReport {
    pub clean: Vec<String>,
    pub dirty: Vec<String>,
}

/// Per-role result of a batch operation.
///
/// Batch operations never abort on a single role's failure; callers observe
/// partial failure through the returned outcome list instead of a side channel.
#[derive(Debug)]
pub struct RoleOutcome {
    pub name: String,
    pub result: Result<(), AppError>,
}

impl RoleOutcome {
    pub fn succeeded(name: impl Into<String>) -> Self {
        Self { name: name.into(), result: Ok(()) }
    }

    pub fn failed(name: impl Into<String>, error: AppError) -> Self {
        Self { name: name.into(), result: Err(error) }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::AppError;

/// Outcome status of a playbook run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Successful,
    Failed,
}

/// Result of a playbook run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub status: RunStatus,
    /// Exit code of the underlying engine, when it terminated normally.
    pub exit_code: Option<i32>,
}

/// Playbook-execution engine, consumed at its interface only.
pub trait PlaybookRunner {
    fn run(
        &self,
        project_dir: &Path,
        playbook: &Path,
        inventory: &Path,
        env: &BTreeMap<String, String>,
    ) -> Result<RunReport, AppError>;
}

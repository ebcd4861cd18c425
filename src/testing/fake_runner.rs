use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{PlaybookRunner, RunReport, RunStatus};

/// One recorded invocation of the fake runner.
#[derive(Debug, Clone)]
pub struct RunCall {
    pub project_dir: PathBuf,
    pub playbook: PathBuf,
    pub inventory: PathBuf,
    pub env: BTreeMap<String, String>,
}

/// Playbook runner returning a fixed status while recording calls.
pub struct FakeRunner {
    status: RunStatus,
    calls: Mutex<Vec<RunCall>>,
}

impl FakeRunner {
    pub fn succeeding() -> Self {
        Self { status: RunStatus::Successful, calls: Mutex::new(Vec::new()) }
    }

    pub fn failing() -> Self {
        Self { status: RunStatus::Failed, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<RunCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl PlaybookRunner for FakeRunner {
    fn run(
        &self,
        project_dir: &Path,
        playbook: &Path,
        inventory: &Path,
        env: &BTreeMap<String, String>,
    ) -> Result<RunReport, AppError> {
        self.calls.lock().unwrap().push(RunCall {
            project_dir: project_dir.to_path_buf(),
            playbook: playbook.to_path_buf(),
            inventory: inventory.to_path_buf(),
            env: env.clone(),
        });
        let exit_code = match self.status {
            RunStatus::Successful => Some(0),
            RunStatus::Failed => Some(2),
        };
        Ok(RunReport { status: self.status, exit_code })
    }
}

use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::{PlaybookRunner, RunReport, RunStatus};

/// Playbook runner invoking the `ansible-playbook` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsibleRunner;

impl AnsibleRunner {
    pub fn new() -> Self {
        Self
    }
}

impl PlaybookRunner for AnsibleRunner {
    fn run(
        &self,
        project_dir: &Path,
        playbook: &Path,
        inventory: &Path,
        env: &BTreeMap<String, String>,
    ) -> Result<RunReport, AppError> {
        let output = Command::new("ansible-playbook")
            .arg(playbook)
            .arg("-i")
            .arg(inventory)
            .current_dir(project_dir)
            .envs(env)
            .output()?;

        let status =
            if output.status.success() { RunStatus::Successful } else { RunStatus::Failed };
        Ok(RunReport { status, exit_code: output.status.code() })
    }
}

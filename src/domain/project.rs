use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A project registry row.
///
/// A project owns a roles subtree (`project/roles/`) where each role's working
/// copy lives, plus the inventory and entry playbook materialized at
/// initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub directory: PathBuf,
    pub repo_url: Option<String>,
    pub active: bool,
}

/// Well-known locations inside a project workspace root.
pub mod paths {
    use std::path::{Path, PathBuf};

    /// Registry database file name at the workspace root.
    pub const REGISTRY_FILE: &str = "registry.db";

    /// Workspace settings file name at the workspace root.
    pub const SETTINGS_FILE: &str = "rolo.toml";

    pub fn registry_file(root: &Path) -> PathBuf {
        root.join(REGISTRY_FILE)
    }

    pub fn settings_file(root: &Path) -> PathBuf {
        root.join(SETTINGS_FILE)
    }

    /// Directory holding one working copy per role slug.
    pub fn roles_dir(root: &Path) -> PathBuf {
        root.join("project").join("roles")
    }

    pub fn role_dir(root: &Path, slug: &str) -> PathBuf {
        roles_dir(root).join(slug)
    }

    pub fn inventory_file(root: &Path) -> PathBuf {
        root.join("inventory").join("hosts")
    }

    /// The project's entry playbook.
    pub fn entry_playbook(root: &Path) -> PathBuf {
        root.join("project").join("main.yml")
    }
}

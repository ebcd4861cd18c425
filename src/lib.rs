//! rolo: manage a local workspace of version-controlled automation roles and
//! projects.
//!
//! The lifecycle manager keeps a relational registry of roles consistent with
//! the on-disk workspace tree under partial failure: after any operation a
//! role is either fully present (row and working copy) or fully absent.
//!
//! The functions below wire the default adapters (SQLite registry, git) over a
//! workspace root. Callers needing different collaborators build an
//! [`app::AppContext`] over their own [`ports`] implementations.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::collections::BTreeMap;
use std::path::Path;

use adapters::{AnsibleRunner, GitVcs, SqliteRegistry};
use app::AppContext;
use app::commands::{add, init, list, project, remove, run, status, update};
use domain::project::paths;

pub use domain::{
    AppError, Project, RepoStatus, Role, RoleName, RoleOutcome, StatusReport, TreeNode,
    default_project_tree,
};
pub use ports::{PlaybookRunner, RegistryStore, RunReport, RunStatus, Vcs};

/// Build a lifecycle manager over `root` with the default adapters.
pub fn open_workspace(root: &Path) -> AppContext<SqliteRegistry, GitVcs> {
    let registry = SqliteRegistry::new(paths::registry_file(root));
    AppContext::new(root.to_path_buf(), registry, GitVcs::new())
}

/// Initialize a project workspace at `root`.
///
/// Materializes the scaffold (`template`, or the default project tree) and
/// creates the registry schema. Safe to re-run.
pub fn initialize(root: &Path, template: Option<&TreeNode>) -> Result<(), AppError> {
    init::execute(&open_workspace(root), template)
}

/// Clone and register a role. See [`app::commands::add::add_role`].
pub fn add_role(root: &Path, name: &str, repo_url: &str) -> Result<Role, AppError> {
    add::add_role(&open_workspace(root), name, repo_url)
}

/// Add a batch of `(name, repo_url)` roles independently, in order.
pub fn add_roles(root: &Path, entries: &[(String, String)]) -> Vec<RoleOutcome> {
    add::add_roles(&open_workspace(root), entries)
}

/// Unregister a role and delete its working copy.
pub fn remove_role(root: &Path, name: &str) -> Result<(), AppError> {
    remove::remove_role(&open_workspace(root), name)
}

/// All registered roles in storage order.
pub fn list_roles(root: &Path) -> Result<Vec<Role>, AppError> {
    list::list_roles(&open_workspace(root))
}

/// Roles registered against `repo_url`.
pub fn find_roles_by_repo_url(root: &Path, repo_url: &str) -> Result<Vec<Role>, AppError> {
    list::find_roles_by_repo_url(&open_workspace(root), repo_url)
}

/// Flip a role's active flag.
pub fn set_role_active(root: &Path, name: &str, active: bool) -> Result<(), AppError> {
    list::set_role_active(&open_workspace(root), name, active)
}

/// Pull one role's working copy from its origin.
pub fn pull_role(root: &Path, name: &str) -> Result<(), AppError> {
    update::pull_role(&open_workspace(root), name)
}

/// Pull every role's working copy, best-effort.
pub fn pull_all_roles(root: &Path) -> Result<Vec<RoleOutcome>, AppError> {
    update::pull_all_roles(&open_workspace(root))
}

/// Push one role's working copy to its origin.
pub fn push_role(root: &Path, name: &str) -> Result<(), AppError> {
    update::push_role(&open_workspace(root), name)
}

/// Stage and commit all changes in one role's working copy.
pub fn commit_role(root: &Path, name: &str, message: &str) -> Result<(), AppError> {
    update::commit_role(&open_workspace(root), name, message)
}

/// Partition registered roles into clean and dirty working copies.
pub fn status_report(root: &Path) -> Result<StatusReport, AppError> {
    status::status_report(&open_workspace(root))
}

/// Register a project row pointing at `directory`.
pub fn register_project(
    root: &Path,
    name: &str,
    directory: &Path,
    repo_url: Option<&str>,
) -> Result<Project, AppError> {
    project::register_project(&open_workspace(root), name, directory, repo_url)
}

/// Remove a project row (and its role links), then its directory tree.
pub fn remove_project(root: &Path, name: &str) -> Result<(), AppError> {
    project::remove_project(&open_workspace(root), name)
}

pub fn list_projects(root: &Path) -> Result<Vec<Project>, AppError> {
    project::list_projects(&open_workspace(root))
}

/// Link a role to a project (many-to-many; idempotent).
pub fn assign_role(root: &Path, project_name: &str, role: &str) -> Result<(), AppError> {
    project::assign_role(&open_workspace(root), project_name, role)
}

pub fn unassign_role(root: &Path, project_name: &str, role: &str) -> Result<(), AppError> {
    project::unassign_role(&open_workspace(root), project_name, role)
}

pub fn project_roles(root: &Path, project_name: &str) -> Result<Vec<Role>, AppError> {
    project::project_roles(&open_workspace(root), project_name)
}

/// Run the project's entry playbook with `ansible-playbook`.
pub fn run_playbook(root: &Path, env: &BTreeMap<String, String>) -> Result<RunReport, AppError> {
    run::run_playbook(&open_workspace(root), &AnsibleRunner::new(), env)
}

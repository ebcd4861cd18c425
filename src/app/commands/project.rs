use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::ensure_initialized;
use crate::domain::{AppError, Project, Role, RoleName};
use crate::ports::{RegistryStore, Vcs};

/// Register a project row pointing at an existing directory.
pub fn register_project<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    name: &str,
    directory: &Path,
    repo_url: Option<&str>,
) -> Result<Project, AppError> {
    ensure_initialized(ctx)?;
    let project_name = RoleName::new(name)?;
    let project = Project {
        name: project_name.as_str().to_string(),
        directory: directory.to_path_buf(),
        repo_url: repo_url.map(str::to_string),
        active: true,
    };
    ctx.registry().insert_project(&project)?;
    Ok(project)
}

/// Remove a project: registry row (and its role links) first, then the
/// directory tree. Role rows linked to the project are never touched.
pub fn remove_project<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    name: &str,
) -> Result<(), AppError> {
    ensure_initialized(ctx)?;
    let directory = ctx.registry().get_project(name)?.map(|p| p.directory);
    ctx.registry().delete_project(name)?;

    if let Some(directory) = directory
        && directory.is_dir()
    {
        fs::remove_dir_all(&directory).map_err(|err| AppError::DirectoryRemovalFailed {
            name: name.to_string(),
            directory,
            details: err.to_string(),
        })?;
    }
    Ok(())
}

pub fn list_projects<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
) -> Result<Vec<Project>, AppError> {
    ensure_initialized(ctx)?;
    ctx.registry().list_projects()
}

/// Link a role to a project. Many-to-many; linking twice is a no-op.
pub fn assign_role<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    project: &str,
    role: &str,
) -> Result<(), AppError> {
    ensure_initialized(ctx)?;
    ctx.registry().link_role(project, role)
}

/// Drop a project↔role link, leaving both rows in place.
pub fn unassign_role<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    project: &str,
    role: &str,
) -> Result<(), AppError> {
    ensure_initialized(ctx)?;
    ctx.registry().unlink_role(project, role)
}

pub fn project_roles<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    project: &str,
) -> Result<Vec<Role>, AppError> {
    ensure_initialized(ctx)?;
    ctx.registry().roles_for_project(project)
}

use std::fs;

use crate::app::AppContext;
use crate::app::commands::ensure_initialized;
use crate::domain::{AppError, RoleName};
use crate::ports::{RegistryStore, Vcs};

/// Remove a role: delete the registry row, then the directory tree.
///
/// The row delete is unconditional (a no-op when absent), so a re-run after a
/// failed directory removal retries only the filesystem side. The operation is
/// deliberately not atomic across the two stores in this direction; the row is
/// gone even when `DirectoryRemovalFailed` is returned.
pub fn remove_role<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    name: &str,
) -> Result<(), AppError> {
    ensure_initialized(ctx)?;

    // Resolve the directory before the row disappears. For an unregistered
    // name, fall back to the slug-derived location to sweep up orphans.
    let directory = match ctx.registry().get_role(name)? {
        Some(role) => Some(role.directory),
        None => RoleName::new(name).ok().map(|n| ctx.roles_dir().join(n.slug())),
    };

    ctx.registry().delete_role(name)?;

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

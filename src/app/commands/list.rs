use crate::app::AppContext;
use crate::app::commands::ensure_initialized;
use crate::domain::{AppError, Role};
use crate::ports::{RegistryStore, Vcs};

/// All registered roles in storage order.
pub fn list_roles<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
) -> Result<Vec<Role>, AppError> {
    ensure_initialized(ctx)?;
    ctx.registry().list_roles()
}

/// Roles registered against a given repository URL.
pub fn find_roles_by_repo_url<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    repo_url: &str,
) -> Result<Vec<Role>, AppError> {
    ensure_initialized(ctx)?;
    ctx.registry().find_roles_by_repo_url(repo_url)
}

/// Flip a role's active flag.
pub fn set_role_active<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    name: &str,
    active: bool,
) -> Result<(), AppError> {
    ensure_initialized(ctx)?;
    ctx.registry().set_role_active(name, active)
}

use tracing::warn;

use crate::app::AppContext;
use crate::app::commands::ensure_initialized;
use crate::domain::{AppError, RoleOutcome};
use crate::ports::{RegistryStore, Vcs};

/// Pull a single role's working copy. Strict: any VCS failure is wrapped as
/// `RoleUpdateFailed` and propagated.
pub fn pull_role<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    name: &str,
) -> Result<(), AppError> {
    ensure_initialized(ctx)?;
    let role = ctx
        .registry()
        .get_role(name)?
        .ok_or_else(|| AppError::RoleNotFound(name.to_string()))?;
    ctx.vcs().pull(&role.directory).map_err(|source| AppError::RoleUpdateFailed {
        name: role.name,
        source: Box::new(source),
    })
}

/// Pull every registered role's working copy, best-effort. A role whose pull
/// fails is skipped and recorded; the loop always runs to completion.
pub fn pull_all_roles<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
) -> Result<Vec<RoleOutcome>, AppError> {
    ensure_initialized(ctx)?;
    let outcomes = ctx
        .registry()
        .list_roles()?
        .into_iter()
        .map(|role| match ctx.vcs().pull(&role.directory) {
            Ok(()) => RoleOutcome::succeeded(role.name),
            Err(err) => {
                warn!(role = %role.name, error = %err, "skipping role during bulk update");
                RoleOutcome::failed(role.name, err)
            }
        })
        .collect();
    Ok(outcomes)
}

/// Push a single role's working copy to its origin.
pub fn push_role<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    name: &str,
) -> Result<(), AppError> {
    ensure_initialized(ctx)?;
    let role = ctx
        .registry()
        .get_role(name)?
        .ok_or_else(|| AppError::RoleNotFound(name.to_string()))?;
    ctx.vcs().push(&role.directory)
}

/// Stage and commit all changes in a role's working copy.
pub fn commit_role<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    name: &str,
    message: &str,
) -> Result<(), AppError> {
    ensure_initialized(ctx)?;
    let role = ctx
        .registry()
        .get_role(name)?
        .ok_or_else(|| AppError::RoleNotFound(name.to_string()))?;
    ctx.vcs().commit(&role.directory, message)
}

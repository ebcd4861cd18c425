use std::fs;

use tracing::{debug, warn};

use crate::app::AppContext;
use crate::app::commands::ensure_initialized;
use crate::domain::{AppError, Role, RoleName, RoleOutcome};
use crate::ports::{RegistryStore, Vcs};

/// Add a role: clone its repository into the roles subtree, then register it.
///
/// Ordered steps with a compensating action per step:
/// 1. Clone into the slugged directory. On failure there is nothing to
///    compensate; no registry row has been written.
/// 2. Insert the registry row. On failure the fresh clone is the only state
///    to undo; it is deleted before the error is reported.
///
/// After success the role is `active` (row and directory both present); after
/// failure it is `absent` — never orphaned.
pub fn add_role<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    name: &str,
    repo_url: &str,
) -> Result<Role, AppError> {
    ensure_initialized(ctx)?;
    let role_name = RoleName::new(name)?;
    let directory = ctx.roles_dir().join(role_name.slug());

    ctx.vcs().clone_repo(repo_url, &directory, None)?;

    let role = Role {
        name: role_name.as_str().to_string(),
        directory,
        repo_url: repo_url.to_string(),
        active: true,
    };
    match ctx.registry().insert_role(&role) {
        Ok(()) => Ok(role),
        Err(AppError::DuplicateKey { .. }) => recover_duplicate(ctx, role),
        Err(err) => {
            discard_clone(&role);
            Err(err)
        }
    }
}

/// The clone succeeded but the row hit a uniqueness violation. Re-read the
/// registry to decide: a row under this name means an idempotent re-add (the
/// new clone is redundant); no row means the duplicate was the directory, so
/// roll the clone back and report the failure.
fn recover_duplicate<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    role: Role,
) -> Result<Role, AppError> {
    match ctx.registry().get_role(&role.name)? {
        Some(existing) => {
            if existing.directory != role.directory {
                discard_clone(&role);
            }
            debug!(role = %role.name, "role already registered; discarded redundant clone");
            Ok(existing)
        }
        None => {
            discard_clone(&role);
            Err(AppError::DuplicateKey { what: "role", name: role.name })
        }
    }
}

fn discard_clone(role: &Role) {
    if let Err(err) = fs::remove_dir_all(&role.directory) {
        // Rollback is best-effort; the registry outcome already stands.
        warn!(
            role = %role.name,
            directory = %role.directory.display(),
            error = %err,
            "failed to remove cloned directory during rollback"
        );
    }
}

/// Add each role independently, in input order. One role's failure never
/// aborts the batch; the returned outcomes record every result.
pub fn add_roles<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    entries: &[(String, String)],
) -> Vec<RoleOutcome> {
    entries
        .iter()
        .map(|(name, repo_url)| match add_role(ctx, name, repo_url) {
            Ok(_) => RoleOutcome::succeeded(name),
            Err(err) => {
                warn!(role = %name, error = %err, "skipping role that failed to add");
                RoleOutcome::failed(name, err)
            }
        })
        .collect()
}

use crate::app::AppContext;
use crate::app::commands::ensure_initialized;
use crate::domain::{AppError, RepoStatus, StatusReport};
use crate::ports::{RegistryStore, Vcs};

/// Partition every registered role into clean and dirty.
///
/// Reads are strict: a role whose directory is missing or is not a working
/// copy aborts the whole report with the VCS error. This contrasts with the
/// best-effort bulk update on purpose — a status answer is only trustworthy
/// when every role could actually be inspected.
pub fn status_report<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
) -> Result<StatusReport, AppError> {
    ensure_initialized(ctx)?;
    let mut report = StatusReport::default();
    for role in ctx.registry().list_roles()? {
        match ctx.vcs().status(&role.directory)? {
            RepoStatus::Clean => report.clean.push(role.name),
            RepoStatus::Dirty => report.dirty.push(role.name),
        }
    }
    Ok(report)
}

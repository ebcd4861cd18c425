pub mod add;
pub mod init;
pub mod list;
pub mod project;
pub mod remove;
pub mod run;
pub mod status;
pub mod update;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{RegistryStore, Vcs};

/// Every operation except `initialize` requires an initialized workspace.
pub(crate) fn ensure_initialized<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
) -> Result<(), AppError> {
    if !ctx.roles_dir().is_dir() {
        return Err(AppError::ProjectNotInitialized(ctx.root().to_path_buf()));
    }
    Ok(())
}

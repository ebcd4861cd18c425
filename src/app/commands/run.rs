use std::collections::BTreeMap;

use crate::app::AppContext;
use crate::app::commands::ensure_initialized;
use crate::domain::AppError;
use crate::domain::project::paths;
use crate::ports::{PlaybookRunner, RegistryStore, RunReport, Vcs};

/// Execute the project's entry playbook against its inventory.
pub fn run_playbook<R, V, P>(
    ctx: &AppContext<R, V>,
    runner: &P,
    env: &BTreeMap<String, String>,
) -> Result<RunReport, AppError>
where
    R: RegistryStore,
    V: Vcs,
    P: PlaybookRunner,
{
    ensure_initialized(ctx)?;
    runner.run(
        ctx.root(),
        &paths::entry_playbook(ctx.root()),
        &paths::inventory_file(ctx.root()),
        env,
    )
}

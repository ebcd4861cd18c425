use std::fs;

use crate::adapters::tree_scaffold;
use crate::app::AppContext;
use crate::domain::{AppError, TreeNode, default_project_tree};
use crate::ports::{RegistryStore, Vcs};

/// Initialize a project workspace at the context root.
///
/// Materializes the scaffold (the injected template, or the default project
/// tree), guarantees the roles subtree exists, then creates the registry
/// schema. Idempotent: re-running never fails, never clobbers existing files,
/// and never disturbs existing role registrations.
pub fn execute<R: RegistryStore, V: Vcs>(
    ctx: &AppContext<R, V>,
    template: Option<&TreeNode>,
) -> Result<(), AppError> {
    let default_tree;
    let tree = match template {
        Some(tree) => tree,
        None => {
            default_tree = default_project_tree();
            &default_tree
        }
    };

    tree_scaffold::materialize(ctx.root(), tree)?;
    // The roles subtree is fixed-shape regardless of the supplied template.
    fs::create_dir_all(ctx.roles_dir())?;
    ctx.registry().create_schema()?;
    Ok(())
}

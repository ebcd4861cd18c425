use std::fs;
use std::path::Path;

use crate::domain::{AppError, TreeNode};

/// Materialize a scaffold template under `root`.
///
/// Directories are created if absent and never error on re-run; files are
/// written only when missing, so repeated materialization leaves user edits
/// untouched. The root directory itself is created when `template` is a
/// directory node.
pub fn materialize(root: &Path, template: &TreeNode) -> Result<(), AppError> {
    match template {
        TreeNode::Dir(entries) => {
            fs::create_dir_all(root)?;
            for (name, node) in entries {
                materialize(&root.join(name), node)?;
            }
        }
        TreeNode::File(content) => {
            if !root.exists() {
                fs::write(root, content)?;
            }
        }
    }
    Ok(())
}

pub mod error;
pub mod project;
pub mod role;
pub mod status;
pub mod tree;

pub use error::AppError;
pub use project::Project;
pub use role::{Role, RoleName};
pub use status::{RepoStatus, RoleOutcome, StatusReport};
pub use tree::{TreeNode, default_project_tree};

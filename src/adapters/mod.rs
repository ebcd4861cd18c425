pub mod ansible_runner;
pub mod git_repository;
pub mod sqlite_registry;
pub mod tree_scaffold;

pub use ansible_runner::AnsibleRunner;
pub use git_repository::GitVcs;
pub use sqlite_registry::SqliteRegistry;
pub use tree_scaffold::materialize;

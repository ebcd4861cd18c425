use crate::domain::{AppError, Project, Role};

/// Relational registry of roles, projects, and their associations.
///
/// Every call opens the backing store, commits or rolls back atomically, and
/// closes it before returning. No transaction spans multiple calls, and no
/// long-lived handle is held across operations.
pub trait RegistryStore {
    /// Create tables if absent. Safe to call repeatedly.
    fn create_schema(&self) -> Result<(), AppError>;

    /// Fails with `DuplicateKey` when the name or directory is already
    /// registered.
    fn insert_role(&self, role: &Role) -> Result<(), AppError>;

    fn get_role(&self, name: &str) -> Result<Option<Role>, AppError>;

    /// All roles in storage (insertion) order. No implicit sort guarantee
    /// beyond that.
    fn list_roles(&self) -> Result<Vec<Role>, AppError>;

    fn find_roles_by_repo_url(&self, repo_url: &str) -> Result<Vec<Role>, AppError>;

    fn set_role_active(&self, name: &str, active: bool) -> Result<(), AppError>;

    /// No-op (not an error) when the name does not exist. Links to projects
    /// are removed alongside the row.
    fn delete_role(&self, name: &str) -> Result<(), AppError>;

    fn insert_project(&self, project: &Project) -> Result<(), AppError>;

    fn get_project(&self, name: &str) -> Result<Option<Project>, AppError>;

    fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    /// No-op when absent. Links to roles are removed alongside the row; role
    /// rows themselves are untouched.
    fn delete_project(&self, name: &str) -> Result<(), AppError>;

    /// Associate a role with a project. Linking an already-linked pair is a
    /// no-op. Fails with `ProjectNotFound`/`RoleNotFound` when either side is
    /// missing.
    fn link_role(&self, project: &str, role: &str) -> Result<(), AppError>;

    /// Remove an association. No-op when the pair is not linked.
    fn unlink_role(&self, project: &str, role: &str) -> Result<(), AppError>;

    /// Roles linked to the project, in link insertion order.
    fn roles_for_project(&self, project: &str) -> Result<Vec<Role>, AppError>;
}

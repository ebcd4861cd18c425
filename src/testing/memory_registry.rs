use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{AppError, Project, Role};
use crate::ports::RegistryStore;

#[derive(Default)]
struct State {
    schema_created: bool,
    roles: Vec<Role>,
    projects: Vec<Project>,
    links: Vec<(String, String)>,
}

/// In-memory registry honoring the same uniqueness rules as the SQLite store.
#[derive(Default)]
pub struct MemoryRegistry {
    state: Mutex<State>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_created(&self) -> bool {
        self.state.lock().unwrap().schema_created
    }

    /// Plant a role row directly, bypassing lifecycle ordering.
    pub fn seed_role(&self, name: &str, directory: PathBuf, repo_url: &str) {
        self.state.lock().unwrap().roles.push(Role {
            name: name.to_string(),
            directory,
            repo_url: repo_url.to_string(),
            active: true,
        });
    }
}

impl RegistryStore for MemoryRegistry {
    fn create_schema(&self) -> Result<(), AppError> {
        self.state.lock().unwrap().schema_created = true;
        Ok(())
    }

    fn insert_role(&self, role: &Role) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state
            .roles
            .iter()
            .any(|r| r.name == role.name || r.directory == role.directory)
        {
            return Err(AppError::DuplicateKey { what: "role", name: role.name.clone() });
        }
        state.roles.push(role.clone());
        Ok(())
    }

    fn get_role(&self, name: &str) -> Result<Option<Role>, AppError> {
        Ok(self.state.lock().unwrap().roles.iter().find(|r| r.name == name).cloned())
    }

    fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        Ok(self.state.lock().unwrap().roles.clone())
    }

    fn find_roles_by_repo_url(&self, repo_url: &str) -> Result<Vec<Role>, AppError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .roles
            .iter()
            .filter(|r| r.repo_url == repo_url)
            .cloned()
            .collect())
    }

    fn set_role_active(&self, name: &str, active: bool) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if let Some(role) = state.roles.iter_mut().find(|r| r.name == name) {
            role.active = active;
        }
        Ok(())
    }

    fn delete_role(&self, name: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.roles.retain(|r| r.name != name);
        state.links.retain(|(_, role)| role != name);
        Ok(())
    }

    fn insert_project(&self, project: &Project) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state
            .projects
            .iter()
            .any(|p| p.name == project.name || p.directory == project.directory)
        {
            return Err(AppError::DuplicateKey { what: "project", name: project.name.clone() });
        }
        state.projects.push(project.clone());
        Ok(())
    }

    fn get_project(&self, name: &str) -> Result<Option<Project>, AppError> {
        Ok(self.state.lock().unwrap().projects.iter().find(|p| p.name == name).cloned())
    }

    fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.state.lock().unwrap().projects.clone())
    }

    fn delete_project(&self, name: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.projects.retain(|p| p.name != name);
        state.links.retain(|(project, _)| project != name);
        Ok(())
    }

    fn link_role(&self, project: &str, role: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if !state.projects.iter().any(|p| p.name == project) {
            return Err(AppError::ProjectNotFound(project.to_string()));
        }
        if !state.roles.iter().any(|r| r.name == role) {
            return Err(AppError::RoleNotFound(role.to_string()));
        }
        let link = (project.to_string(), role.to_string());
        if !state.links.contains(&link) {
            state.links.push(link);
        }
        Ok(())
    }

    fn unlink_role(&self, project: &str, role: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.links.retain(|(p, r)| !(p == project && r == role));
        Ok(())
    }

    fn roles_for_project(&self, project: &str) -> Result<Vec<Role>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .links
            .iter()
            .filter(|(p, _)| p == project)
            .filter_map(|(_, role)| state.roles.iter().find(|r| &r.name == role))
            .cloned()
            .collect())
    }
}

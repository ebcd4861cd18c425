use std::path::{Path, PathBuf};

use rusqlite::{Connection, ErrorCode, OptionalExtension, Row, params};

use crate::domain::{AppError, Project, Role};
use crate::ports::RegistryStore;

const CREATE_ROLES_TABLE: &str = "CREATE TABLE IF NOT EXISTS roles(
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    directory TEXT NOT NULL UNIQUE,
    repo_url TEXT,
    active INTEGER NOT NULL
)";

const CREATE_PROJECTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS projects(
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    directory TEXT NOT NULL UNIQUE,
    repo_url TEXT,
    active INTEGER NOT NULL
)";

const CREATE_PROJECT_ROLES_TABLE: &str = "CREATE TABLE IF NOT EXISTS project_roles(
    project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    role_id INTEGER NOT NULL REFERENCES roles(id) ON DELETE CASCADE,
    UNIQUE(project_id, role_id)
)";

/// SQLite-backed registry store.
///
/// One connection is opened per call and dropped on return; rusqlite's
/// autocommit makes each statement atomic. The database file carries the
/// registry for exactly one workspace.
#[derive(Debug, Clone)]
pub struct SqliteRegistry {
    db_file: PathBuf,
}

impl SqliteRegistry {
    pub fn new(db_file: PathBuf) -> Self {
        Self { db_file }
    }

    pub fn db_file(&self) -> &Path {
        &self.db_file
    }

    fn connect(&self) -> Result<Connection, AppError> {
        let conn = Connection::open(&self.db_file)?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        Ok(conn)
    }
}

fn duplicate_key(err: rusqlite::Error, what: &'static str, name: &str) -> AppError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            AppError::DuplicateKey { what, name: name.to_string() }
        }
        _ => AppError::Registry(err),
    }
}

fn role_from_row(row: &Row<'_>) -> rusqlite::Result<Role> {
    Ok(Role {
        name: row.get(0)?,
        directory: PathBuf::from(row.get::<_, String>(1)?),
        repo_url: row.get(2)?,
        active: row.get(3)?,
    })
}

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        name: row.get(0)?,
        directory: PathBuf::from(row.get::<_, String>(1)?),
        repo_url: row.get(2)?,
        active: row.get(3)?,
    })
}

impl RegistryStore for SqliteRegistry {
    fn create_schema(&self) -> Result<(), AppError> {
        let conn = self.connect()?;
        conn.execute(CREATE_ROLES_TABLE, [])?;
        conn.execute(CREATE_PROJECTS_TABLE, [])?;
        conn.execute(CREATE_PROJECT_ROLES_TABLE, [])?;
        Ok(())
    }

    fn insert_role(&self, role: &Role) -> Result<(), AppError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO roles(name, directory, repo_url, active) VALUES(?1, ?2, ?3, ?4)",
            params![
                role.name,
                role.directory.to_string_lossy(),
                role.repo_url,
                role.active
            ],
        )
        .map_err(|err| duplicate_key(err, "role", &role.name))?;
        Ok(())
    }

    fn get_role(&self, name: &str) -> Result<Option<Role>, AppError> {
        let conn = self.connect()?;
        let role = conn
            .query_row(
                "SELECT name, directory, repo_url, active FROM roles WHERE name = ?1",
                params![name],
                role_from_row,
            )
            .optional()?;
        Ok(role)
    }

    fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare("SELECT name, directory, repo_url, active FROM roles ORDER BY rowid")?;
        let roles = stmt
            .query_map([], role_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(roles)
    }

    fn find_roles_by_repo_url(&self, repo_url: &str) -> Result<Vec<Role>, AppError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT name, directory, repo_url, active FROM roles WHERE repo_url = ?1 ORDER BY rowid",
        )?;
        let roles = stmt
            .query_map(params![repo_url], role_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(roles)
    }

    fn set_role_active(&self, name: &str, active: bool) -> Result<(), AppError> {
        let conn = self.connect()?;
        conn.execute(
            "UPDATE roles SET active = ?1 WHERE name = ?2",
            params![active, name],
        )?;
        Ok(())
    }

    fn delete_role(&self, name: &str) -> Result<(), AppError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM project_roles WHERE role_id IN (SELECT rowid FROM roles WHERE name = ?1)",
            params![name],
        )?;
        tx.execute("DELETE FROM roles WHERE name = ?1", params![name])?;
        tx.commit()?;
        Ok(())
    }

    fn insert_project(&self, project: &Project) -> Result<(), AppError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO projects(name, directory, repo_url, active) VALUES(?1, ?2, ?3, ?4)",
            params![
                project.name,
                project.directory.to_string_lossy(),
                project.repo_url,
                project.active
            ],
        )
        .map_err(|err| duplicate_key(err, "project", &project.name))?;
        Ok(())
    }

    fn get_project(&self, name: &str) -> Result<Option<Project>, AppError> {
        let conn = self.connect()?;
        let project = conn
            .query_row(
                "SELECT name, directory, repo_url, active FROM projects WHERE name = ?1",
                params![name],
                project_from_row,
            )
            .optional()?;
        Ok(project)
    }

    fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare("SELECT name, directory, repo_url, active FROM projects ORDER BY rowid")?;
        let projects = stmt
            .query_map([], project_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(projects)
    }

    fn delete_project(&self, name: &str) -> Result<(), AppError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM project_roles
             WHERE project_id IN (SELECT rowid FROM projects WHERE name = ?1)",
            params![name],
        )?;
        tx.execute("DELETE FROM projects WHERE name = ?1", params![name])?;
        tx.commit()?;
        Ok(())
    }

    fn link_role(&self, project: &str, role: &str) -> Result<(), AppError> {
        let conn = self.connect()?;
        let project_id: i64 = conn
            .query_row("SELECT rowid FROM projects WHERE name = ?1", params![project], |row| {
                row.get(0)
            })
            .optional()?
            .ok_or_else(|| AppError::ProjectNotFound(project.to_string()))?;
        let role_id: i64 = conn
            .query_row("SELECT rowid FROM roles WHERE name = ?1", params![role], |row| row.get(0))
            .optional()?
            .ok_or_else(|| AppError::RoleNotFound(role.to_string()))?;
        conn.execute(
            "INSERT OR IGNORE INTO project_roles VALUES(?1, ?2)",
            params![project_id, role_id],
        )?;
        Ok(())
    }

    fn unlink_role(&self, project: &str, role: &str) -> Result<(), AppError> {
        let conn = self.connect()?;
        conn.execute(
            "DELETE FROM project_roles
             WHERE project_id IN (SELECT rowid FROM projects WHERE name = ?1)
               AND role_id IN (SELECT rowid FROM roles WHERE name = ?2)",
            params![project, role],
        )?;
        Ok(())
    }

    fn roles_for_project(&self, project: &str) -> Result<Vec<Role>, AppError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT r.name, r.directory, r.repo_url, r.active
             FROM roles r
             JOIN project_roles pr ON pr.role_id = r.rowid
             JOIN projects p ON p.rowid = pr.project_id
             WHERE p.name = ?1
             ORDER BY pr.rowid",
        )?;
        let roles = stmt
            .query_map(params![project], role_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(roles)
    }
}

//! Workspace settings: a flat key/value mapping persisted as TOML.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::AppError;

pub type Settings = BTreeMap<String, String>;

/// Read a settings mapping from `file`.
pub fn read(file: &Path) -> Result<Settings, AppError> {
    let content = fs::read_to_string(file)?;
    Ok(toml::from_str(&content)?)
}

/// Write a settings mapping to `file`, replacing any previous contents.
pub fn write(settings: &Settings, file: &Path) -> Result<(), AppError> {
    let content = toml::to_string_pretty(settings)?;
    fs::write(file, content)?;
    Ok(())
}

use std::collections::BTreeMap;

use serde::Deserialize;

use super::AppError;

/// A node in a declarative scaffold template.
///
/// Mappings become subdirectories, strings become seed file contents. The
/// variant is untagged so templates read naturally from YAML:
///
/// ```yaml
/// inventory:
///   hosts: ""
/// project:
///   main.yml: "---\n"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Seed file content, written only when the file is absent.
    File(String),
    /// Subdirectory, recursively materialized.
    Dir(BTreeMap<String, TreeNode>),
}

impl TreeNode {
    /// Parse a template from YAML, for callers supplying an alternate scaffold.
    pub fn from_yaml(source: &str) -> Result<Self, AppError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn dir<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, TreeNode)>,
    {
        Self::Dir(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    pub fn file(content: &str) -> Self {
        Self::File(content.to_string())
    }
}

/// The default project scaffold.
///
/// Versioned configuration data rather than compiled-in behavior: `initialize`
/// accepts any [`TreeNode`] and merely defaults to this one.
pub fn default_project_tree() -> TreeNode {
    TreeNode::dir([
        (
            "ansible.cfg",
            TreeNode::file("[defaults]\ninventory = inventory/hosts\nroles_path = project/roles\n"),
        ),
        ("rolo.toml", TreeNode::file("# rolo workspace settings\n")),
        (
            "env",
            TreeNode::dir([
                ("envvars", TreeNode::file("")),
                ("extravars", TreeNode::file("")),
                ("passwords", TreeNode::file("")),
                ("cmdline", TreeNode::file("")),
                ("settings", TreeNode::file("")),
                ("ssh_key", TreeNode::file("")),
            ]),
        ),
        ("inventory", TreeNode::dir([("hosts", TreeNode::file(""))])),
        (
            "project",
            TreeNode::dir([
                ("roles", TreeNode::dir([])),
                ("main.yml", TreeNode::file("---\n")),
            ]),
        ),
    ])
}

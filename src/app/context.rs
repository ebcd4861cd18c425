use std::path::{Path, PathBuf};

use crate::domain::project::paths;
use crate::ports::{RegistryStore, Vcs};

/// Dependencies for lifecycle operations on one workspace root.
///
/// The context owns the consistency contract between the registry and the
/// filesystem; the registry and VCS collaborators know nothing of each other.
pub struct AppContext<R: RegistryStore, V: Vcs> {
    root: PathBuf,
    registry: R,
    vcs: V,
}

impl<R: RegistryStore, V: Vcs> AppContext<R, V> {
    pub fn new(root: PathBuf, registry: R, vcs: V) -> Self {
        Self { root, registry, vcs }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    /// The roles subtree where every role's working copy lives.
    pub fn roles_dir(&self) -> PathBuf {
        paths::roles_dir(&self.root)
    }
}

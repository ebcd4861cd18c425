mod registry;
mod runner;
mod vcs;

pub use registry::RegistryStore;
pub use runner::{PlaybookRunner, RunReport, RunStatus};
pub use vcs::Vcs;

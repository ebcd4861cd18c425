mod fake_runner;
mod fake_vcs;
mod memory_registry;

pub use fake_runner::{FakeRunner, RunCall};
pub use fake_vcs::FakeVcs;
pub use memory_registry::MemoryRegistry;

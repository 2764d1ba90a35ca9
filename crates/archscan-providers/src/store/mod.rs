//! Analysis store implementations
//!
//! Both stores keep the analysis as an opaque JSON document keyed by
//! requesting user and repository.

mod filesystem;
mod in_memory;

pub use filesystem::FileSystemAnalysisStore;
pub use in_memory::InMemoryAnalysisStore;

//! External Provider Ports

/// Repository hosting API port
pub mod repository_host;

pub use repository_host::RepositoryHostProvider;

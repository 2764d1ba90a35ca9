//! # Archscan - Provider Implementations
//!
//! Concrete adapters for the ports defined in `archscan-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Repository host | `RepositoryHostProvider` | GitHub REST API |
//! | Analysis store | `AnalysisStore` | Filesystem, InMemory |

pub use archscan_domain::error::{Error, Result};
pub use archscan_domain::ports::{AnalysisStore, RepositoryHostProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration for API-based providers
pub mod http;

/// Repository host implementations
pub mod github;

/// Analysis store implementations
pub mod store;

pub use github::GitHubRepositoryHost;
pub use http::HttpClientConfig;
pub use store::{FileSystemAnalysisStore, InMemoryAnalysisStore};

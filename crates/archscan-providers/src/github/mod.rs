//! GitHub repository host
//!
//! Implements [`RepositoryHostProvider`](archscan_domain::ports::RepositoryHostProvider)
//! over the GitHub REST API v3.

mod provider;
mod responses;

pub use provider::GitHubRepositoryHost;

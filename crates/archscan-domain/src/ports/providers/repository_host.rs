//! Repository Host Port
//!
//! Read-only access to a hosted repository. Every call is authenticated
//! with the credential the provider was constructed with; the analyzer
//! never handles credentials itself.

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{
    LanguageHistogram, RawFileContent, RepoDescriptor, RepoIdentity, RepoTreeEntry,
};

/// Repository hosting API
///
/// Implementations must return an error for any non-success response or
/// malformed payload; deciding which failures are fatal is the caller's job.
#[async_trait]
pub trait RepositoryHostProvider: Send + Sync {
    /// Repository descriptor (name, default branch, stars, license, ...)
    async fn get_repo_descriptor(&self, repo: &RepoIdentity) -> Result<RepoDescriptor>;

    /// Bytes of code per language
    async fn get_language_histogram(&self, repo: &RepoIdentity) -> Result<LanguageHistogram>;

    /// Full recursive file tree of `branch`, in host order
    async fn get_tree_recursive(
        &self,
        repo: &RepoIdentity,
        branch: &str,
    ) -> Result<Vec<RepoTreeEntry>>;

    /// Raw content of one file on the default branch
    async fn get_file_raw_content(&self, repo: &RepoIdentity, path: &str)
    -> Result<RawFileContent>;

    /// Short provider name for logs
    fn provider_name(&self) -> &str;
}

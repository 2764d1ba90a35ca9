//! Analysis Store Port
//!
//! The persistence collaborator stores a finished analysis as an opaque JSON
//! blob keyed by who requested it and which repository it describes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value_objects::{RepoIdentity, RepositoryAnalysis};

/// Storage key for one analysis
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisKey {
    /// Identity of the requesting user
    pub user: String,
    /// Analyzed repository
    pub repo: RepoIdentity,
}

impl AnalysisKey {
    pub fn new<U: Into<String>>(user: U, repo: RepoIdentity) -> Self {
        Self {
            user: user.into(),
            repo,
        }
    }
}

/// Sink for finished analyses. Saving twice under one key replaces the
/// previous blob.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Persist an analysis
    async fn save(&self, key: &AnalysisKey, analysis: &RepositoryAnalysis) -> Result<()>;

    /// Load a previously saved analysis
    async fn load(&self, key: &AnalysisKey) -> Result<Option<RepositoryAnalysis>>;

    /// Short provider name for logs
    fn provider_name(&self) -> &str;
}

//! In-memory analysis store
//!
//! Keeps serialized documents in a concurrent map. Nothing survives a
//! restart; intended for tests and one-shot runs.

use std::sync::Arc;

use archscan_domain::RepositoryAnalysis;
use archscan_domain::error::Result;
use archscan_domain::ports::{AnalysisKey, AnalysisStore};
use async_trait::async_trait;
use dashmap::DashMap;

/// In-memory analysis store
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalysisStore {
    documents: Arc<DashMap<AnalysisKey, String>>,
}

impl InMemoryAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored analyses
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Raw JSON document for `key`
    pub fn document(&self, key: &AnalysisKey) -> Option<String> {
        self.documents.get(key).map(|doc| doc.value().clone())
    }
}

#[async_trait]
impl AnalysisStore for InMemoryAnalysisStore {
    async fn save(&self, key: &AnalysisKey, analysis: &RepositoryAnalysis) -> Result<()> {
        let document = serde_json::to_string(analysis)?;
        self.documents.insert(key.clone(), document);
        Ok(())
    }

    async fn load(&self, key: &AnalysisKey) -> Result<Option<RepositoryAnalysis>> {
        self.document(key)
            .map(|document| serde_json::from_str(&document))
            .transpose()
            .map_err(Into::into)
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

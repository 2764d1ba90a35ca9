//! Filesystem analysis store
//!
//! Layout: `<base>/<user>/<owner>__<repo>.json`, pretty-printed.

use std::path::{Path, PathBuf};

use archscan_domain::RepositoryAnalysis;
use archscan_domain::error::{Error, Result};
use archscan_domain::ports::{AnalysisKey, AnalysisStore};
use async_trait::async_trait;
use tracing::debug;

use crate::constants::{STORE_FILE_EXTENSION, STORE_REPO_SEPARATOR};

/// Stores each analysis as one JSON file
#[derive(Debug, Clone)]
pub struct FileSystemAnalysisStore {
    base_path: PathBuf,
}

impl FileSystemAnalysisStore {
    /// Create a store rooted at `base_path`. The directory is created lazily.
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// File holding the analysis for `key`
    pub fn path_for(&self, key: &AnalysisKey) -> Result<PathBuf> {
        let user = path_component(&key.user, "user")?;
        let owner = path_component(&key.repo.owner, "repository owner")?;
        let name = path_component(&key.repo.name, "repository name")?;
        Ok(self.base_path.join(user).join(format!(
            "{owner}{STORE_REPO_SEPARATOR}{name}.{STORE_FILE_EXTENSION}"
        )))
    }
}

/// Reject values that would escape the store directory
fn path_component<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    if value.is_empty()
        || value == "."
        || value == ".."
        || value.contains(['/', '\\', '\0'])
    {
        return Err(Error::invalid_argument(format!(
            "Invalid {what} for analysis store: '{value}'"
        )));
    }
    Ok(value)
}

#[async_trait]
impl AnalysisStore for FileSystemAnalysisStore {
    async fn save(&self, key: &AnalysisKey, analysis: &RepositoryAnalysis) -> Result<()> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::storage_with_source(
                    format!("Failed to create store directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let content = serde_json::to_vec_pretty(analysis)?;
        // Write then rename so readers never observe a partial document
        let staging = path.with_extension(format!("{STORE_FILE_EXTENSION}.tmp"));
        tokio::fs::write(&staging, content).await.map_err(|e| {
            Error::storage_with_source(format!("Failed to write {}", staging.display()), e)
        })?;
        tokio::fs::rename(&staging, &path).await.map_err(|e| {
            Error::storage_with_source(format!("Failed to replace {}", path.display()), e)
        })?;

        debug!(path = %path.display(), "Analysis saved");
        Ok(())
    }

    async fn load(&self, key: &AnalysisKey) -> Result<Option<RepositoryAnalysis>> {
        let path = self.path_for(key)?;
        let content = match tokio::fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::storage_with_source(
                    format!("Failed to read {}", path.display()),
                    e,
                ));
            }
        };

        serde_json::from_slice(&content).map(Some).map_err(|e| {
            Error::storage_with_source(format!("Corrupt analysis file {}", path.display()), e)
        })
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

//! GitHub REST payloads
//!
//! Only the fields the analyzer reads are declared; serde ignores the rest.

use archscan_domain::{EntryKind, RepoDescriptor, RepoTreeEntry};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Deserialize)]
pub(crate) struct RepoResponse {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub default_branch: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub size: u64,
    pub private: bool,
    pub license: Option<LicenseResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LicenseResponse {
    pub name: String,
}

impl From<RepoResponse> for RepoDescriptor {
    fn from(repo: RepoResponse) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            language: repo.language,
            topics: repo.topics,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            default_branch: repo.default_branch,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
            size: repo.size,
            is_private: repo.private,
            license: repo.license.map(|license| license.name),
        }
    }
}

/// `GET /repos/{owner}/{repo}/git/trees/{sha}?recursive=1`
#[derive(Debug, Deserialize)]
pub(crate) struct TreeResponse {
    pub tree: Vec<TreeItem>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TreeItem {
    pub path: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub size: Option<u64>,
}

impl TreeItem {
    /// Blobs and trees map onto entries; submodule commits are dropped
    pub fn into_entry(self) -> Option<RepoTreeEntry> {
        let kind = match self.item_type.as_str() {
            "blob" => EntryKind::Blob,
            "tree" => EntryKind::Tree,
            _ => return None,
        };
        Some(RepoTreeEntry {
            path: self.path,
            kind,
            size: self.size.filter(|_| kind == EntryKind::Blob),
        })
    }
}

/// `GET /repos/{owner}/{repo}/contents/{path}` for a file
#[derive(Debug, Deserialize)]
pub(crate) struct ContentResponse {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}

//! Repository identity and metadata

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-language byte counts reported by the host
pub type LanguageHistogram = BTreeMap<String, u64>;

/// Owner and name of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RepoIdentity {
    /// User or organization that owns the repository
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoIdentity {
    /// Create an identity from its two parts
    pub fn new<O: Into<String>, N: Into<String>>(owner: O, name: N) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse `owner/name` or a `https://github.com/owner/name(.git)` URL
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim().trim_end_matches('/');
        let path = trimmed
            .strip_prefix("https://github.com/")
            .or_else(|| trimmed.strip_prefix("http://github.com/"))
            .or_else(|| trimmed.strip_prefix("github.com/"))
            .unwrap_or(trimmed);
        let path = path.strip_suffix(".git").unwrap_or(path);

        let mut parts = path.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if is_valid_part(owner) && is_valid_part(name) => {
                Ok(Self::new(owner, name))
            }
            _ => Err(Error::invalid_argument(format!(
                "Expected 'owner/repo' or a GitHub URL, got '{input}'"
            ))),
        }
    }

    /// `owner/name` form
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

fn is_valid_part(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl fmt::Display for RepoIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Repository descriptor as returned by the host, before the language
/// histogram is attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoDescriptor {
    pub name: String,
    pub description: Option<String>,
    /// Primary language as computed by the host
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    pub default_branch: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Repository size in kilobytes
    pub size: u64,
    pub is_private: bool,
    /// License display name
    pub license: Option<String>,
}

/// Repository metadata carried in the final analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoMetadata {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub languages: LanguageHistogram,
    pub topics: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    pub default_branch: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub size: u64,
    pub is_private: bool,
    pub license: Option<String>,
}

impl RepoMetadata {
    /// Combine a descriptor with the separately fetched language histogram
    pub fn from_parts(descriptor: RepoDescriptor, languages: LanguageHistogram) -> Self {
        Self {
            name: descriptor.name,
            description: descriptor.description,
            language: descriptor.language,
            languages,
            topics: descriptor.topics,
            stars: descriptor.stars,
            forks: descriptor.forks,
            default_branch: descriptor.default_branch,
            created_at: descriptor.created_at,
            updated_at: descriptor.updated_at,
            size: descriptor.size,
            is_private: descriptor.is_private,
            license: descriptor.license,
        }
    }

    /// Languages ordered by byte count, largest first, with their share in percent
    // Byte counts far below 2^52; shares are only rendered to one decimal
    #[allow(clippy::cast_precision_loss)]
    pub fn language_shares(&self) -> Vec<(String, f64)> {
        let total: u64 = self.languages.values().sum();
        if total == 0 {
            return Vec::new();
        }
        let mut shares: Vec<(String, u64)> = self
            .languages
            .iter()
            .map(|(lang, bytes)| (lang.clone(), *bytes))
            .collect();
        shares.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        shares
            .into_iter()
            .map(|(lang, bytes)| (lang, bytes as f64 * 100.0 / total as f64))
            .collect()
    }
}

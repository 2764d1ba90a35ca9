//! Repository file tree snapshot

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw text of fetched files, keyed by repository-relative path.
///
/// A path missing from the map means "no signal", whether the file does not
/// exist, was not allow-listed, fell outside the fetch cap, failed to
/// download, or was binary.
pub type FileContentMap = BTreeMap<String, String>;

/// Kind of a tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular file
    Blob,
    /// Directory
    Tree,
}

/// One file-system object in the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoTreeEntry {
    /// POSIX-style path relative to the repository root
    pub path: String,
    /// Blob or tree
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Byte size, blobs only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl RepoTreeEntry {
    /// File entry
    pub fn blob<P: Into<String>>(path: P, size: Option<u64>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Blob,
            size,
        }
    }

    /// Directory entry
    pub fn tree<P: Into<String>>(path: P) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Tree,
            size: None,
        }
    }

    pub fn is_blob(&self) -> bool {
        self.kind == EntryKind::Blob
    }

    pub fn is_tree(&self) -> bool {
        self.kind == EntryKind::Tree
    }

    /// Last path segment
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Content returned by the host for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFileContent {
    /// UTF-8 text
    Text(String),
    /// Anything that did not decode as UTF-8
    Binary(Vec<u8>),
}

impl RawFileContent {
    /// Text content, `None` for binary files
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }

    /// Classify raw bytes as text or binary
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self::Text(text),
            Err(err) => Self::Binary(err.into_bytes()),
        }
    }
}

//! Domain Value Objects
//!
//! Immutable values describing one repository snapshot and the analysis
//! derived from it.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`RepoIdentity`] | `owner/name` pair addressing a hosted repository |
//! | [`RepoMetadata`] | Descriptor plus language histogram |
//! | [`RepoTreeEntry`] | One path of the recursive file tree |
//! | [`FileContentMap`] | Raw text of the allow-listed files that were fetched |
//! | [`RepositoryAnalysis`] | The aggregate produced by the analyzer |

/// Analysis facets and the aggregate record
pub mod analysis;
/// Repository identity and descriptor
pub mod repository;
/// File tree snapshot types
pub mod tree;

pub use analysis::*;
pub use repository::{LanguageHistogram, RepoDescriptor, RepoIdentity, RepoMetadata};
pub use tree::{EntryKind, FileContentMap, RawFileContent, RepoTreeEntry};

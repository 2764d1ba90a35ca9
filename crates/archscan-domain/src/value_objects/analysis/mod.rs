//! Analysis facets
//!
//! Each facet is produced by one classifier and has an explicit
//! "nothing detected" state (`None` tags, empty lists, `false` flags).
//! Single-valued decisions with a tie-break (architecture pattern,
//! organization axis, naming convention) are stored next to the raw
//! signals that fed them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::repository::RepoMetadata;

/// Declares a closed set of string tags with matching serde names,
/// `as_str` and `Display`.
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $tag)] $variant ),+
        }

        impl $name {
            /// Serialized tag
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $tag ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod api;
mod architecture;
mod database;
mod dependencies;
mod environment;
mod infrastructure;
mod messaging;
mod testing;

pub use api::{ApiAnalysis, ApiEndpoint, ApiSchemaFile, ApiSchemaType, ApiStyle};
pub use architecture::{
    ArchitectureAnalysis, ArchitecturePattern, FolderInfo, FolderPurpose, NamingConvention,
    OrganizationAxis, StructureFlags,
};
pub use database::{DatabaseAnalysis, DatabaseEngine, MigrationFolder, Orm, SchemaFile};
pub use dependencies::{
    Dependency, DependencyAnalysis, DependencyCategory, DependencyKind, PackageManager,
};
pub use environment::{EnvVariable, EnvironmentAnalysis};
pub use infrastructure::{
    CiCdInfo, CiCdPlatform, CloudInfo, ContainerizationInfo, IacInfo, IacTool,
    InfrastructureAnalysis, OrchestrationInfo,
};
pub use messaging::{MessagingAnalysis, MessagingPattern, MessagingSystem};
pub use testing::{TestAnalysis, TestFile, TestFramework, TestType};

/// The analyzer's sole output artifact.
///
/// Fully determined by the tree, the content map and the metadata;
/// only `analyzed_at` differs between two runs over the same snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryAnalysis {
    pub metadata: RepoMetadata,
    pub architecture: ArchitectureAnalysis,
    pub dependencies: DependencyAnalysis,
    pub database: DatabaseAnalysis,
    pub apis: ApiAnalysis,
    pub infrastructure: InfrastructureAnalysis,
    pub environment: EnvironmentAnalysis,
    pub tests: TestAnalysis,
    pub messaging: MessagingAnalysis,
    pub analyzed_at: DateTime<Utc>,
}

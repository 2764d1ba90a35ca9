use serde::{Deserialize, Serialize};

tag_enum! {
    pub enum PackageManager {
        Npm => "npm",
        Yarn => "yarn",
        Pnpm => "pnpm",
        Bun => "bun",
        Pip => "pip",
    }
}

tag_enum! {
    /// How a dependency is declared
    pub enum DependencyKind {
        Runtime => "runtime",
        Dev => "dev",
        /// Part of the stored schema; no parsed manifest emits it yet
        Peer => "peer",
    }
}

tag_enum! {
    /// Single category per dependency, resolved by precedence
    /// framework > database > testing > ui > utility
    pub enum DependencyCategory {
        Framework => "framework",
        Database => "database",
        Testing => "testing",
        Ui => "ui",
        Utility => "utility",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    /// Declared version, `"latest"` when the manifest gives none
    pub version: String,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
    pub category: DependencyCategory,
}

/// Dependencies across the parsed manifests.
///
/// Entries are not deduplicated across manifests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyAnalysis {
    pub package_manager: Option<PackageManager>,
    pub dependencies: Vec<Dependency>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    pub testing: Vec<String>,
    pub build_tools: Vec<String>,
}

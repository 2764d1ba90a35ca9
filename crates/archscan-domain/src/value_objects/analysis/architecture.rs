use serde::{Deserialize, Serialize};

tag_enum! {
    /// Overall architecture resolved from the structure flags
    #[derive(Default)]
    pub enum ArchitecturePattern {
        Microservices => "microservices",
        DomainDriven => "domain-driven",
        Layered => "layered",
        Modular => "modular",
        Monolith => "monolith",
        #[default]
        Unknown => "unknown",
    }
}

tag_enum! {
    /// Purpose of a single folder
    pub enum FolderPurpose {
        Service => "service",
        Domain => "domain",
        Layer => "layer",
        Module => "module",
        Unknown => "unknown",
    }
}

tag_enum! {
    /// Dominant folder naming style
    #[derive(Default)]
    pub enum NamingConvention {
        KebabCase => "kebab-case",
        SnakeCase => "snake_case",
        CamelCase => "camelCase",
        #[default]
        Mixed => "mixed",
    }
}

tag_enum! {
    /// Axis along which code is grouped
    #[derive(Default)]
    pub enum OrganizationAxis {
        Service => "service",
        Domain => "domain",
        Layer => "layer",
        #[default]
        Feature => "feature",
    }
}

/// Raw structural signals; several can be true at once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureFlags {
    /// Top-level `services/` or `apps/`
    pub has_services: bool,
    /// Top-level `modules/`
    pub has_modules: bool,
    /// `controllers/`, `models/`, `views/` or `services/` at any depth
    pub has_layers: bool,
    /// Top-level `domain/` or `domains/`
    pub has_domains: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderInfo {
    pub path: String,
    pub purpose: FolderPurpose,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureAnalysis {
    pub pattern: ArchitecturePattern,
    pub structure: StructureFlags,
    /// Purpose tags for a capped sample of folders, in tree order
    pub folders: Vec<FolderInfo>,
    pub naming_convention: NamingConvention,
    pub organization: OrganizationAxis,
}

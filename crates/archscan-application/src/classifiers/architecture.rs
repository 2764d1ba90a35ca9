//! Architecture classifier
//!
//! Works on folder paths only. Four non-exclusive structural predicates feed
//! a single pattern resolved by priority:
//! services > domains > layers > modules > monolith.

use std::sync::LazyLock;

use archscan_domain::constants::FOLDER_SAMPLE_LIMIT;
use archscan_domain::{
    ArchitectureAnalysis, ArchitecturePattern, FolderInfo, FolderPurpose, NamingConvention,
    OrganizationAxis, RepoTreeEntry, StructureFlags,
};
use regex::Regex;

use super::pattern;

static SERVICES_DIR: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(services|apps)(/|$)"));
static MODULES_DIR: LazyLock<Regex> = LazyLock::new(|| pattern(r"^modules(/|$)"));
static LAYER_DIR: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(^|/)(controllers|models|views|services)(/|$)"));
static DOMAIN_DIR: LazyLock<Regex> = LazyLock::new(|| pattern(r"^domains?(/|$)"));
static CAMEL_CASE: LazyLock<Regex> = LazyLock::new(|| pattern(r"[a-z][A-Z]"));

/// Classify the repository layout
pub fn classify_architecture(tree: &[RepoTreeEntry]) -> ArchitectureAnalysis {
    let folders: Vec<&str> = tree
        .iter()
        .filter(|entry| entry.is_tree())
        .map(|entry| entry.path.as_str())
        .collect();

    let structure = detect_structure(&folders);

    ArchitectureAnalysis {
        pattern: resolve_pattern(structure),
        structure,
        folders: folders
            .iter()
            .take(FOLDER_SAMPLE_LIMIT)
            .map(|path| FolderInfo {
                path: (*path).to_string(),
                purpose: folder_purpose(path),
            })
            .collect(),
        naming_convention: detect_naming_convention(&folders),
        organization: resolve_organization(structure),
    }
}

/// Evaluate the four predicates against the whole folder set
pub fn detect_structure(folders: &[&str]) -> StructureFlags {
    let any = |re: &Regex| folders.iter().any(|path| re.is_match(path));
    StructureFlags {
        has_services: any(&*SERVICES_DIR),
        has_modules: any(&*MODULES_DIR),
        has_layers: any(&*LAYER_DIR),
        has_domains: any(&*DOMAIN_DIR),
    }
}

/// Single pattern tag; service decomposition outranks every other signal
pub fn resolve_pattern(flags: StructureFlags) -> ArchitecturePattern {
    if flags.has_services {
        ArchitecturePattern::Microservices
    } else if flags.has_domains {
        ArchitecturePattern::DomainDriven
    } else if flags.has_layers {
        ArchitecturePattern::Layered
    } else if flags.has_modules {
        ArchitecturePattern::Modular
    } else {
        ArchitecturePattern::Monolith
    }
}

/// Same chain as [`resolve_pattern`]; modules and monoliths are feature-organized
pub fn resolve_organization(flags: StructureFlags) -> OrganizationAxis {
    if flags.has_services {
        OrganizationAxis::Service
    } else if flags.has_domains {
        OrganizationAxis::Domain
    } else if flags.has_layers {
        OrganizationAxis::Layer
    } else {
        OrganizationAxis::Feature
    }
}

/// Per-folder purpose, first matching predicate wins
pub fn folder_purpose(path: &str) -> FolderPurpose {
    if SERVICES_DIR.is_match(path) {
        FolderPurpose::Service
    } else if DOMAIN_DIR.is_match(path) {
        FolderPurpose::Domain
    } else if LAYER_DIR.is_match(path) {
        FolderPurpose::Layer
    } else if MODULES_DIR.is_match(path) {
        FolderPurpose::Module
    } else {
        FolderPurpose::Unknown
    }
}

/// Dominant naming style over all folder paths; ties and no signal give `Mixed`
pub fn detect_naming_convention(folders: &[&str]) -> NamingConvention {
    let kebab = folders.iter().filter(|path| path.contains('-')).count();
    let snake = folders.iter().filter(|path| path.contains('_')).count();
    let camel = folders
        .iter()
        .filter(|path| CAMEL_CASE.is_match(path))
        .count();

    let counts = [
        (NamingConvention::KebabCase, kebab),
        (NamingConvention::SnakeCase, snake),
        (NamingConvention::CamelCase, camel),
    ];
    let max = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
    if max == 0 {
        return NamingConvention::Mixed;
    }

    let mut leaders = counts.iter().filter(|(_, count)| *count == max);
    match (leaders.next(), leaders.next()) {
        (Some((convention, _)), None) => *convention,
        _ => NamingConvention::Mixed,
    }
}

//! Prompt formatter tests

use std::collections::BTreeMap;

use archscan_application::{Facets, aggregate, format_analysis_as_prompt};
use archscan_domain::{
    ArchitecturePattern, DatabaseEngine, Orm, RepoIdentity, RepoMetadata, RepositoryAnalysis,
    SchemaFile,
};
use chrono::{TimeZone, Utc};

fn metadata() -> RepoMetadata {
    let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    RepoMetadata {
        name: "widgets".to_string(),
        description: None,
        language: Some("TypeScript".to_string()),
        languages: BTreeMap::from([
            ("TypeScript".to_string(), 750),
            ("CSS".to_string(), 250),
        ]),
        topics: Vec::new(),
        stars: 42,
        forks: 7,
        default_branch: "main".to_string(),
        created_at: timestamp,
        updated_at: timestamp,
        size: 512,
        is_private: false,
        license: None,
    }
}

fn empty_analysis() -> RepositoryAnalysis {
    aggregate(metadata(), Facets::default(), Utc::now())
}

#[test]
fn test_sections_in_order() {
    let prompt = format_analysis_as_prompt(&RepoIdentity::new("octo", "widgets"), &empty_analysis());

    assert!(prompt.starts_with("# Repository Analysis: octo/widgets\n"));
    let headings = [
        "## Overview",
        "## Architecture",
        "## Dependencies",
        "## Database",
        "## APIs",
        "## Infrastructure",
        "## Environment",
        "## Tests",
        "## Messaging",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|heading| prompt.find(heading).unwrap_or_else(|| panic!("missing {heading}")))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_empty_facets_render_gracefully() {
    let prompt = format_analysis_as_prompt(&RepoIdentity::new("octo", "widgets"), &empty_analysis());

    assert!(prompt.contains("- Package Manager: None detected\n"));
    assert!(prompt.contains("- Type: None detected\n"));
    assert!(prompt.contains("- Docker: No\n"));
    assert!(prompt.contains("- CI/CD: None detected\n"));
    assert!(prompt.contains("- Uses Messaging: No\n"));
    assert!(prompt.contains("- Languages: TypeScript (75.0%), CSS (25.0%)\n"));
    assert!(prompt.contains("- Stars: 42\n"));
}

#[test]
fn test_detected_values_are_rendered() {
    let mut analysis = empty_analysis();
    analysis.architecture.pattern = ArchitecturePattern::Microservices;
    analysis.database.engine = Some(DatabaseEngine::Postgresql);
    analysis.database.orm = Some(Orm::Prisma);
    analysis.database.schemas.push(SchemaFile {
        file: "prisma/schema.prisma".to_string(),
        content: String::new(),
        models: vec!["User".to_string(), "Post".to_string()],
    });

    let prompt = format_analysis_as_prompt(&RepoIdentity::new("octo", "widgets"), &analysis);
    assert!(prompt.contains("- Pattern: microservices\n"));
    assert!(prompt.contains("- Type: postgresql\n"));
    assert!(prompt.contains("- ORM: prisma\n"));
    assert!(prompt.contains("- Models: User, Post\n"));
}

#[test]
fn test_long_lists_are_elided() {
    let mut analysis = empty_analysis();
    analysis.environment.env_files = (0..20).map(|i| format!("svc{i}/.env")).collect();

    let prompt = format_analysis_as_prompt(&RepoIdentity::new("octo", "widgets"), &analysis);
    assert!(prompt.contains("svc14/.env, ... and 5 more\n"));
    assert!(!prompt.contains("svc15/.env"));
}

#[test]
fn test_rendering_is_deterministic() {
    let analysis = empty_analysis();
    let repo = RepoIdentity::new("octo", "widgets");
    assert_eq!(
        format_analysis_as_prompt(&repo, &analysis),
        format_analysis_as_prompt(&repo, &analysis)
    );
}

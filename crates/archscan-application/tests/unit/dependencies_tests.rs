//! Dependency classifier tests

use archscan_application::classifiers::dependencies::{
    categorize, classify_dependencies, requirements_dependencies,
};
use archscan_domain::{DependencyCategory, DependencyKind, FileContentMap, PackageManager};

fn contents(entries: &[(&str, &str)]) -> FileContentMap {
    entries
        .iter()
        .map(|(path, raw)| ((*path).to_string(), (*raw).to_string()))
        .collect()
}

#[test]
fn test_runtime_and_dev_dependencies() {
    let map = contents(&[(
        "package.json",
        r#"{"dependencies": {"express": "4.18.0"}, "devDependencies": {"jest": "29.0.0"}}"#,
    )]);
    let analysis = classify_dependencies(&map);

    assert_eq!(analysis.package_manager, Some(PackageManager::Npm));
    assert_eq!(analysis.dependencies.len(), 2);

    let express = &analysis.dependencies[0];
    assert_eq!(express.name, "express");
    assert_eq!(express.version, "4.18.0");
    assert_eq!(express.kind, DependencyKind::Runtime);
    assert_eq!(express.category, DependencyCategory::Framework);

    let jest = &analysis.dependencies[1];
    assert_eq!(jest.name, "jest");
    assert_eq!(jest.kind, DependencyKind::Dev);
    assert_eq!(jest.category, DependencyCategory::Testing);

    assert_eq!(analysis.frameworks, vec!["express"]);
    assert_eq!(analysis.testing, vec!["jest"]);
}

#[test]
fn test_malformed_manifest_yields_empty_analysis() {
    let map = contents(&[("package.json", r#"{"dependencies": {"express": "#)]);
    let analysis = classify_dependencies(&map);

    assert!(analysis.dependencies.is_empty());
    assert!(analysis.frameworks.is_empty());
    assert_eq!(analysis.package_manager, None);
}

#[test]
fn test_no_manifest_means_no_package_manager() {
    let analysis = classify_dependencies(&FileContentMap::new());
    assert_eq!(analysis.package_manager, None);
    assert!(analysis.dependencies.is_empty());
}

#[test]
fn test_package_manager_field_refines_tag() {
    for (declared, expected) in [
        ("pnpm@8.15.0", PackageManager::Pnpm),
        ("yarn@4.1.0", PackageManager::Yarn),
        ("bun@1.0.0", PackageManager::Bun),
        ("unknown@1.0.0", PackageManager::Npm),
    ] {
        let raw = format!(r#"{{"packageManager": "{declared}"}}"#);
        let analysis = classify_dependencies(&contents(&[("package.json", &raw)]));
        assert_eq!(analysis.package_manager, Some(expected), "declared: {declared}");
    }
}

#[test]
fn test_dev_dependency_shadowed_by_runtime() {
    let map = contents(&[(
        "package.json",
        r#"{"dependencies": {"typescript": "5.0.0"}, "devDependencies": {"typescript": "5.1.0"}}"#,
    )]);
    let analysis = classify_dependencies(&map);

    assert_eq!(analysis.dependencies.len(), 1);
    assert_eq!(analysis.dependencies[0].kind, DependencyKind::Runtime);
    assert_eq!(analysis.build_tools, vec!["typescript"]);
}

#[test]
fn test_non_string_versions_are_tolerated() {
    let map = contents(&[("package.json", r#"{"dependencies": {"odd": 3}}"#)]);
    let analysis = classify_dependencies(&map);

    assert_eq!(analysis.dependencies.len(), 1);
    assert_eq!(analysis.dependencies[0].name, "odd");
}

#[test]
fn test_requirements_txt() {
    let raw = "# web\nDjango==4.2.1\nrequests>=2.31\n\n-r base.txt\nuvicorn[standard]\npsycopg2-binary ~= 2.9\n";
    let deps = requirements_dependencies(raw);

    let names: Vec<&str> = deps.iter().map(|dep| dep.name.as_str()).collect();
    assert_eq!(names, vec!["Django", "requests", "uvicorn", "psycopg2-binary"]);
    assert_eq!(deps[0].version, "4.2.1");
    assert_eq!(deps[0].category, DependencyCategory::Framework);
    assert_eq!(deps[2].version, "latest");
    assert_eq!(deps[3].category, DependencyCategory::Database);
    assert!(deps.iter().all(|dep| dep.kind == DependencyKind::Runtime));
}

#[test]
fn test_requirements_alone_selects_pip() {
    let analysis = classify_dependencies(&contents(&[("requirements.txt", "flask==3.0\n")]));
    assert_eq!(analysis.package_manager, Some(PackageManager::Pip));
    assert_eq!(analysis.frameworks, vec!["flask"]);
}

#[test]
fn test_manifests_are_not_deduplicated_across_ecosystems() {
    let map = contents(&[
        ("package.json", r#"{"dependencies": {"redis": "4.0.0"}}"#),
        ("requirements.txt", "redis==5.0\n"),
    ]);
    let analysis = classify_dependencies(&map);

    assert_eq!(analysis.package_manager, Some(PackageManager::Npm));
    assert_eq!(analysis.dependencies.len(), 2);
    assert_eq!(analysis.databases, vec!["redis"]);
}

#[test]
fn test_category_precedence() {
    assert_eq!(categorize("next"), DependencyCategory::Framework);
    assert_eq!(categorize("@prisma/client"), DependencyCategory::Database);
    assert_eq!(categorize("@testing-library/react"), DependencyCategory::Testing);
    assert_eq!(categorize("@mui/material"), DependencyCategory::Ui);
    assert_eq!(categorize("lodash"), DependencyCategory::Utility);
}

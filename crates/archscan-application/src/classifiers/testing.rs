//! Test classifier

use std::sync::LazyLock;

use archscan_domain::{
    FileContentMap, RepoTreeEntry, TestAnalysis, TestFile, TestFramework, TestType,
};
use regex::Regex;

use super::manifest::parsed_manifest;
use super::pattern;

static TEST_FILE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\.(test|spec)\.(js|jsx|ts|tsx|mjs|cjs)$"));

/// Checked in order, first declared framework wins
const FRAMEWORKS: &[(&str, TestFramework)] = &[
    ("jest", TestFramework::Jest),
    ("vitest", TestFramework::Vitest),
    ("mocha", TestFramework::Mocha),
];

const COVERAGE_CONFIG_PREFIXES: &[&str] = &["jest.config", "vitest.config"];

/// Classify test files, framework and coverage configuration
pub fn classify_tests(tree: &[RepoTreeEntry], contents: &FileContentMap) -> TestAnalysis {
    let test_files = tree
        .iter()
        .filter(|entry| entry.is_blob() && TEST_FILE.is_match(&entry.path))
        .map(|entry| TestFile {
            path: entry.path.clone(),
            test_type: test_type_of(&entry.path),
        })
        .collect();

    let framework = parsed_manifest(contents).and_then(|manifest| {
        FRAMEWORKS
            .iter()
            .find(|(name, _)| manifest.declares(name))
            .map(|(_, framework)| *framework)
    });

    let has_coverage_config = tree.iter().any(|entry| {
        entry.is_blob()
            && COVERAGE_CONFIG_PREFIXES
                .iter()
                .any(|prefix| entry.file_name().starts_with(prefix))
    });

    TestAnalysis {
        framework,
        test_files,
        has_coverage_config,
    }
}

/// e2e > integration > unit, by case-insensitive substring of the whole path.
///
/// Not segment matching: `src/community/a.test.ts` contains "unit" and is a unit test.
pub fn test_type_of(path: &str) -> TestType {
    let path = path.to_lowercase();
    if path.contains("e2e") {
        TestType::E2e
    } else if path.contains("integration") {
        TestType::Integration
    } else if path.contains("unit") {
        TestType::Unit
    } else {
        TestType::Unknown
    }
}

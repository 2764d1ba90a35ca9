//! Unit tests for repository identity and metadata

use std::collections::BTreeMap;

use archscan_domain::{RawFileContent, RepoDescriptor, RepoIdentity, RepoMetadata, RepoTreeEntry};
use chrono::{TimeZone, Utc};

fn descriptor() -> RepoDescriptor {
    RepoDescriptor {
        name: "widgets".to_string(),
        description: Some("Widget service".to_string()),
        language: Some("TypeScript".to_string()),
        topics: vec!["api".to_string()],
        stars: 10,
        forks: 2,
        default_branch: "main".to_string(),
        created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        size: 2048,
        is_private: false,
        license: Some("MIT".to_string()),
    }
}

#[test]
fn test_parse_owner_repo() {
    let repo = RepoIdentity::parse("octo/widgets").unwrap();
    assert_eq!(repo.owner, "octo");
    assert_eq!(repo.name, "widgets");
    assert_eq!(repo.full_name(), "octo/widgets");
}

#[test]
fn test_parse_github_urls() {
    for input in [
        "https://github.com/octo/widgets",
        "https://github.com/octo/widgets.git",
        "https://github.com/octo/widgets/",
        "github.com/octo/widgets",
    ] {
        let repo = RepoIdentity::parse(input).unwrap();
        assert_eq!(repo, RepoIdentity::new("octo", "widgets"), "input: {input}");
    }
}

#[test]
fn test_parse_rejects_malformed_identity() {
    for input in ["", "octo", "octo/", "/widgets", "octo/widgets/extra", "oc to/widgets"] {
        assert!(RepoIdentity::parse(input).is_err(), "input: {input}");
    }
}

#[test]
fn test_metadata_from_parts_keeps_descriptor_fields() {
    let mut languages = BTreeMap::new();
    languages.insert("TypeScript".to_string(), 900);
    languages.insert("CSS".to_string(), 100);

    let metadata = RepoMetadata::from_parts(descriptor(), languages);
    assert_eq!(metadata.name, "widgets");
    assert_eq!(metadata.default_branch, "main");
    assert_eq!(metadata.languages.len(), 2);
    assert_eq!(metadata.license.as_deref(), Some("MIT"));
}

#[test]
fn test_language_shares_sorted_by_bytes() {
    let mut languages = BTreeMap::new();
    languages.insert("CSS".to_string(), 250);
    languages.insert("TypeScript".to_string(), 750);

    let metadata = RepoMetadata::from_parts(descriptor(), languages);
    let shares = metadata.language_shares();
    assert_eq!(shares[0].0, "TypeScript");
    assert!((shares[0].1 - 75.0).abs() < f64::EPSILON);
    assert_eq!(shares[1].0, "CSS");
}

#[test]
fn test_language_shares_empty_histogram() {
    let metadata = RepoMetadata::from_parts(descriptor(), BTreeMap::new());
    assert!(metadata.language_shares().is_empty());
}

#[test]
fn test_tree_entry_helpers() {
    let blob = RepoTreeEntry::blob("src/routes/users.ts", Some(120));
    assert!(blob.is_blob());
    assert_eq!(blob.file_name(), "users.ts");

    let dir = RepoTreeEntry::tree("src");
    assert!(dir.is_tree());
    assert_eq!(dir.size, None);
    assert_eq!(dir.file_name(), "src");
}

#[test]
fn test_raw_content_from_bytes() {
    assert_eq!(
        RawFileContent::from_bytes(b"PORT=3000".to_vec()).into_text(),
        Some("PORT=3000".to_string())
    );
    assert_eq!(
        RawFileContent::from_bytes(vec![0xff, 0xfe, 0x00]).into_text(),
        None
    );
}

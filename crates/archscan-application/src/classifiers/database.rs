//! Database classifier
//!
//! Prisma is the only ORM signal read today. Migration folders are found
//! independently, so raw-SQL setups are reported even without an ORM.

use std::sync::LazyLock;

use archscan_domain::constants::PRISMA_SCHEMA_PATH;
use archscan_domain::{
    DatabaseAnalysis, DatabaseEngine, FileContentMap, MigrationFolder, Orm, RepoTreeEntry,
    SchemaFile,
};
use regex::Regex;

use super::pattern;

static PRISMA_PROVIDER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"provider\s*=\s*"(postgresql|mysql|sqlite|mongodb)""#));
static PRISMA_MODEL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?m)^\s*model\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{"));
static MIGRATIONS_DIR: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)(^|/)migrations?$"));

/// Classify database engine, ORM, schemas and migrations
pub fn classify_database(tree: &[RepoTreeEntry], contents: &FileContentMap) -> DatabaseAnalysis {
    let mut analysis = DatabaseAnalysis::default();

    if let Some(schema) = contents.get(PRISMA_SCHEMA_PATH) {
        analysis.orm = Some(Orm::Prisma);
        analysis.engine = prisma_engine(schema);
        analysis.schemas.push(SchemaFile {
            file: PRISMA_SCHEMA_PATH.to_string(),
            content: schema.clone(),
            models: prisma_models(schema),
        });
    }

    analysis.migrations = migration_folders(tree);
    analysis
}

/// Engine named by the datasource `provider`; generator providers never match
pub fn prisma_engine(schema: &str) -> Option<DatabaseEngine> {
    let caps = PRISMA_PROVIDER.captures(schema)?;
    match &caps[1] {
        "postgresql" => Some(DatabaseEngine::Postgresql),
        "mysql" => Some(DatabaseEngine::Mysql),
        "sqlite" => Some(DatabaseEngine::Sqlite),
        "mongodb" => Some(DatabaseEngine::Mongodb),
        _ => None,
    }
}

/// `model Name {` declarations in source order
pub fn prisma_models(schema: &str) -> Vec<String> {
    PRISMA_MODEL
        .captures_iter(schema)
        .map(|caps| caps[1].to_string())
        .collect()
}

fn migration_folders(tree: &[RepoTreeEntry]) -> Vec<MigrationFolder> {
    tree.iter()
        .filter(|entry| entry.is_tree() && MIGRATIONS_DIR.is_match(&entry.path))
        .map(|dir| {
            let prefix = format!("{}/", dir.path);
            let file_count = tree
                .iter()
                .filter(|entry| {
                    entry.is_blob()
                        && entry.path.starts_with(&prefix)
                        && entry.path.to_lowercase().ends_with(".sql")
                })
                .count();
            MigrationFolder {
                folder: dir.path.clone(),
                file_count,
            }
        })
        .collect()
}

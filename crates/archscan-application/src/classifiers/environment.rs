//! Environment classifier
//!
//! Reads env templates and `.env` files. Every variable is reported as
//! required since the format carries no optionality signal.

use std::sync::LazyLock;

use archscan_domain::{EnvVariable, EnvironmentAnalysis, FileContentMap, RepoTreeEntry};
use regex::Regex;

use super::{pattern, push_unique};

/// Basenames treated as env files
pub const ENV_FILE_NAMES: &[&str] = &[".env.example", ".env.sample", ".env.template", ".env"];

static ENV_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(?:export\s+)?([A-Z][A-Z0-9_]*)\s*="));

/// (substrings, hint) pairs for backing services
const SERVICE_HINTS: &[(&[&str], &str)] = &[
    (&["DATABASE", "POSTGRES", "MYSQL", "MONGO"], "database"),
    (&["REDIS"], "redis"),
];

/// (substrings, hint) pairs for third-party integrations
const INTEGRATION_HINTS: &[(&[&str], &str)] =
    &[(&["STRIPE"], "stripe"), (&["SENDGRID", "MAILGUN"], "email")];

/// Classify env files, declared variables and inferred services
pub fn classify_environment(
    tree: &[RepoTreeEntry],
    contents: &FileContentMap,
) -> EnvironmentAnalysis {
    let env_files: Vec<String> = tree
        .iter()
        .filter(|entry| entry.is_blob() && ENV_FILE_NAMES.contains(&entry.file_name()))
        .map(|entry| entry.path.clone())
        .collect();

    let mut analysis = EnvironmentAnalysis::default();

    for file in &env_files {
        let Some(raw) = contents.get(file) else {
            continue;
        };
        for name in declared_variables(raw) {
            for hint in matching_hints(&name, SERVICE_HINTS) {
                push_unique(&mut analysis.services, hint.to_string());
            }
            for hint in matching_hints(&name, INTEGRATION_HINTS) {
                push_unique(&mut analysis.integrations, hint.to_string());
            }
            if !analysis.variables.iter().any(|var| var.name == name) {
                analysis.variables.push(EnvVariable {
                    name,
                    required: true,
                });
            }
        }
    }

    analysis.env_files = env_files;
    analysis
}

/// Upper-snake-case names declared as `NAME=` at line start
pub fn declared_variables(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| ENV_DECLARATION.captures(line.trim_start()))
        .map(|caps| caps[1].to_string())
        .collect()
}

fn matching_hints<'a>(
    name: &'a str,
    hints: &'a [(&'a [&'a str], &'a str)],
) -> impl Iterator<Item = &'a str> + 'a {
    hints
        .iter()
        .filter(move |(needles, _)| needles.iter().any(|needle| name.contains(needle)))
        .map(|(_, hint)| *hint)
}

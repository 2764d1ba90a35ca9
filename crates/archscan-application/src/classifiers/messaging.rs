//! Messaging classifier
//!
//! `amqplib` and `kafkajs` identify a system on their own. `ioredis` only
//! counts together with structural messaging paths, since Redis is mostly
//! used as a cache.

use std::sync::LazyLock;

use archscan_domain::{
    FileContentMap, MessagingAnalysis, MessagingPattern, MessagingSystem, RepoTreeEntry,
};
use regex::Regex;

use super::manifest::parsed_manifest;
use super::{pattern, push_unique};

/// A whole path segment naming a messaging concept; plurals allowed
static MESSAGING_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)(^|/)(queues?|events?|messages?|pubsub|pub-sub|kafka|rabbitmq)(/|$)")
});

/// Classify messaging usage
pub fn classify_messaging(tree: &[RepoTreeEntry], contents: &FileContentMap) -> MessagingAnalysis {
    let files: Vec<String> = tree
        .iter()
        .filter(|entry| entry.is_blob() && MESSAGING_SEGMENT.is_match(&entry.path))
        .map(|entry| entry.path.clone())
        .collect();

    let mut systems = Vec::new();
    if let Some(manifest) = parsed_manifest(contents) {
        if manifest.declares("amqplib") {
            systems.push(MessagingSystem::Rabbitmq);
        }
        if manifest.declares("kafkajs") {
            systems.push(MessagingSystem::Kafka);
        }
        if manifest.declares("ioredis") && !files.is_empty() {
            systems.push(MessagingSystem::Redis);
        }
    }

    let mut patterns = Vec::new();
    for path in files.iter().map(|path| path.to_lowercase()) {
        if path.contains("queue") {
            push_unique(&mut patterns, MessagingPattern::Queue);
        }
        if path.contains("pubsub") || path.contains("pub-sub") {
            push_unique(&mut patterns, MessagingPattern::PubSub);
        }
    }

    MessagingAnalysis {
        has_messaging: !files.is_empty() || !systems.is_empty(),
        systems,
        patterns,
        files,
    }
}

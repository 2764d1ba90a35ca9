use serde::{Deserialize, Serialize};

tag_enum! {
    pub enum MessagingSystem {
        Rabbitmq => "rabbitmq",
        Kafka => "kafka",
        Redis => "redis",
    }
}

tag_enum! {
    pub enum MessagingPattern {
        Queue => "queue",
        PubSub => "pub-sub",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingAnalysis {
    /// Structural files found, or at least one system identified
    pub has_messaging: bool,
    pub systems: Vec<MessagingSystem>,
    pub patterns: Vec<MessagingPattern>,
    pub files: Vec<String>,
}

use serde::{Deserialize, Serialize};

tag_enum! {
    pub enum DatabaseEngine {
        Postgresql => "postgresql",
        Mysql => "mysql",
        Sqlite => "sqlite",
        Mongodb => "mongodb",
    }
}

tag_enum! {
    pub enum Orm {
        Prisma => "prisma",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFile {
    pub file: String,
    pub content: String,
    /// Model names in declaration order
    pub models: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationFolder {
    pub folder: String,
    /// Number of `.sql` files below the folder
    pub file_count: usize,
}

/// `engine == None && orm == None` is the expected result for most repositories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseAnalysis {
    #[serde(rename = "type")]
    pub engine: Option<DatabaseEngine>,
    pub orm: Option<Orm>,
    pub schemas: Vec<SchemaFile>,
    pub migrations: Vec<MigrationFolder>,
}

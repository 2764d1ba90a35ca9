use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    pub name: String,
    /// Always `true`: env templates carry no optionality signal
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentAnalysis {
    pub env_files: Vec<String>,
    pub variables: Vec<EnvVariable>,
    /// Backing services inferred from variable names (`database`, `redis`)
    pub services: Vec<String>,
    /// Third-party integrations inferred from variable names (`stripe`, `email`)
    pub integrations: Vec<String>,
}

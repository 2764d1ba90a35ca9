//! Analysis store configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONFIG_DIR, DEFAULT_STORE_SUBDIR};

/// Persistence of finished analyses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Save every analysis after it completes
    pub enabled: bool,
    /// Root directory of the filesystem store
    pub directory: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_STORE_SUBDIR),
        }
    }
}

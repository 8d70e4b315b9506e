//! Snippet store configuration.

use serde::{Deserialize, Serialize};

/// Snippet store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root directory under which all snippets and folders are persisted.
    #[serde(default = "default_root_path")]
    pub root_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
        }
    }
}

fn default_root_path() -> String {
    "./data/snippets".to_string()
}

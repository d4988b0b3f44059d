use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Where the persisted records live (default: platform data dir)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the welcome screen stays up after signing in
    #[serde(default = "default_welcome_delay_ms")]
    pub welcome_delay_ms: u64,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides, `name = "#RRGGBB"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            welcome_delay_ms: default_welcome_delay_ms(),
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_welcome_delay_ms() -> u64 {
    2500
}

fn default_true() -> bool {
    true
}

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory whose immediate subdirectories are the workspaces
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// SQLite file holding checkpoints
    #[serde(default)]
    pub store: Option<PathBuf>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Editor used to write checkpoints (falls back to $VISUAL / $EDITOR)
    #[serde(default)]
    pub editor: Option<String>,
    /// Program that opens a workspace directory
    #[serde(default = "default_ide")]
    pub ide: String,
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
    /// How long transient messages stay on screen
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: None,
            store: None,
            log_file: None,
            editor: None,
            ide: default_ide(),
            max_rows: default_max_rows(),
            message_timeout_ms: default_message_timeout_ms(),
            ui: UiConfig::default(),
        }
    }
}

fn default_ide() -> String {
    "code".to_string()
}

fn default_max_rows() -> usize {
    10
}

fn default_message_timeout_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfig {
    /// Colour overrides keyed by theme slot, as `#RRGGBB`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::model::config::{Config, UiConfig};

const DEFAULT_EDITOR: &str = "hx";
const STORE_FILE: &str = "workspaces.sql";
const LOG_FILE: &str = "workspaces.log";

/// Error type for reading config.toml
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("no workspace root given and $HOME is not set")]
    NoRoot,
}

/// Values given on the command line; each one beats the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub editor: Option<String>,
    pub ide: Option<String>,
    pub max_rows: Option<usize>,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub store: PathBuf,
    pub log_file: PathBuf,
    pub editor: String,
    pub ide: String,
    pub max_rows: usize,
    pub message_timeout: Duration,
    pub ui: UiConfig,
}

impl Settings {
    pub fn resolve(overrides: Overrides, config: Config) -> Result<Settings, ConfigError> {
        Self::resolve_with(overrides, config, |key| {
            std::env::var(key).ok().filter(|v| !v.is_empty())
        })
    }

    /// `resolve` with the environment supplied by `env`.
    pub fn resolve_with(
        overrides: Overrides,
        config: Config,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Settings, ConfigError> {
        let root = match overrides.root.or(config.root) {
            Some(root) => root,
            None => env("HOME")
                .map(|home| PathBuf::from(home).join("development").join("workspaces"))
                .ok_or(ConfigError::NoRoot)?,
        };
        let store = overrides
            .store
            .or(config.store)
            .unwrap_or_else(|| root.join(STORE_FILE));
        let log_file = config.log_file.unwrap_or_else(|| root.join(LOG_FILE));
        let editor = overrides
            .editor
            .or(config.editor)
            .or_else(|| env("VISUAL"))
            .or_else(|| env("EDITOR"))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        Ok(Settings {
            root,
            store,
            log_file,
            editor,
            ide: overrides.ide.unwrap_or(config.ide),
            max_rows: overrides.max_rows.unwrap_or(config.max_rows).max(1),
            message_timeout: Duration::from_millis(config.message_timeout_ms),
            ui: config.ui,
        })
    }
}

/// Default location of config.toml: `$XDG_CONFIG_HOME/workspaces`, else
/// `$HOME/.config/workspaces`.
pub fn default_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir().map(|home| home.join(".config")))?;
    Some(base.join("workspaces").join("config.toml"))
}

pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Read the config file. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".ttsyncrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory scanned for tagged template strings.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Directory holding per-locale dictionary files.
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    /// Locale whose dictionary is extracted directly from source.
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
    /// Locales derived from the base locale via translation.
    #[serde(default = "default_target_locales")]
    pub target_locales: Vec<String>,
    /// File extension scanned for occurrences.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_source_root() -> String {
    "./src".to_string()
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_base_locale() -> String {
    "en".to_string()
}

fn default_target_locales() -> Vec<String> {
    vec!["ru".to_string()]
}

fn default_extension() -> String {
    "tsx".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            messages_root: default_messages_root(),
            base_locale: default_base_locale(),
            target_locales: default_target_locales(),
            extension: default_extension(),
        }
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

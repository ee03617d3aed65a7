//! Configuration file management for Goal Writer.
//!
//! Supports reading secrets from `~/.config/goalwriter/secret.json`.

use goalwriter_core::error::{GoalWriterError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Loads the secret configuration file from ~/.config/goalwriter/secret.json
pub fn load_secret_config() -> Result<SecretConfig> {
    load_secret_config_from(&get_config_path()?)
}

/// Loads a secret configuration file from an explicit path.
pub fn load_secret_config_from(config_path: &Path) -> Result<SecretConfig> {
    if !config_path.exists() {
        return Err(GoalWriterError::config(format!(
            "Configuration file not found at: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        GoalWriterError::config(format!(
            "Failed to read configuration file at {}: {}",
            config_path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        GoalWriterError::config(format!(
            "Failed to parse configuration file at {}: {}",
            config_path.display(),
            e
        ))
    })
}

/// Returns the path to the configuration file: ~/.config/goalwriter/secret.json
fn get_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| GoalWriterError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("goalwriter").join("secret.json"))
}

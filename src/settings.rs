//! Credential Store
//!
//! JSON-file persistence for the Mistral API key. The orchestrator itself
//! only consumes a credential string; this store exists so callers have a
//! place to keep it between sessions.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "complexity-lens";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mistral_api_key: Option<String>,
}

/// File-backed store for the API credential.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Store under the platform config directory.
    pub fn new() -> Result<Self, SettingsError> {
        let base = dirs::config_dir()
            .ok_or_else(|| SettingsError::Config("no config directory available".to_string()))?;
        Ok(Self {
            path: base.join(APP_DIR).join(SETTINGS_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the stored credential, if any. Empty keys read as absent.
    pub fn load(&self) -> Result<Option<String>, SettingsError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let settings: StoredSettings = serde_json::from_str(&raw)?;
        Ok(settings.mistral_api_key.filter(|key| !key.is_empty()))
    }

    pub fn save(&self, api_key: &str) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let settings = StoredSettings {
            mistral_api_key: Some(api_key.to_string()),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&settings)?)?;
        Ok(())
    }

    /// Remove the stored settings entirely.
    pub fn clear(&self) -> Result<(), SettingsError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

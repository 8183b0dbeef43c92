//! Process-wide copilot configuration.
//!
//! Constructed once at startup and read-only thereafter; request handling
//! never mutates it. Passed by reference into components at construction
//! time rather than looked up ambiently.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Credentials and client options for an OpenAI-compatible backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// Override for self-hosted or proxied deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

/// Credentials for the Fal image backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FalConfig {
    pub api_key: String,
}

/// Copilot configuration bundle: provider credentials plus feature keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CopilotConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai: Option<OpenAiConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fal: Option<FalConfig>,
    /// Third-party image-search key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsplash_key: Option<String>,
    /// Version of config schema (for future migrations)
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    1
}

impl Default for CopilotConfig {
    fn default() -> Self {
        Self {
            openai: None,
            fal: None,
            unsplash_key: None,
            version: 1,
        }
    }
}

impl CopilotConfig {
    /// Get the config file path (~/.copilot/config.toml)
    pub fn path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("HOME environment variable not set")?;
        Ok(PathBuf::from(home).join(".copilot").join("config.toml"))
    }

    /// Check if config exists (i.e., not first run)
    pub fn exists() -> bool {
        Self::path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Load config from the default path, or return None if it doesn't exist
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(Some(config))
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}

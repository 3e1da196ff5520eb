//! Configuration file loading

use crate::constants::config::DEFAULT_CONFIG_FILE;
use crate::constants::github::{API_BASE, DEFAULT_PER_PAGE};
use crate::utils::validators;
use anyhow::{Context, Result};
use ghfetch_github::{GitHubClient, OAuthToken};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API root, `https://api.github.com` unless talking to an Enterprise host
    pub base_uri: String,
    pub per_page: u32,
    /// File holding an OAuth token; `~/` is expanded to the home directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_uri: API_BASE.to_string(),
            per_page: DEFAULT_PER_PAGE,
            token_file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path))?;

        debug!(path, "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document is valid and means "all defaults".
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)?
        };

        validators::validate_config(&config).map_err(validators::validation_errors_to_anyhow)?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the default file is absent
    ///
    /// A path other than the default must exist.
    pub fn load_config(path: &str) -> Result<Self> {
        if path == DEFAULT_CONFIG_FILE && !Path::new(path).exists() {
            debug!(path, "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(
        mut self,
        base_uri: Option<String>,
        per_page: Option<u32>,
    ) -> Result<Self> {
        if let Some(base_uri) = base_uri {
            self.base_uri = base_uri;
        }
        if let Some(per_page) = per_page {
            self.per_page = per_page;
        }
        validators::validate_config(&self).map_err(validators::validation_errors_to_anyhow)?;
        Ok(self)
    }

    /// Configured token file with `~/` expanded
    pub fn token_file_path(&self) -> Option<PathBuf> {
        self.token_file.as_deref().map(expand_home)
    }

    /// Build a GitHub client for this configuration
    pub fn client(&self, token: OAuthToken) -> Result<GitHubClient> {
        let client = GitHubClient::new(token)
            .context("Failed to build HTTP client")?
            .with_base_uri(self.base_uri.clone())
            .with_per_page(self.per_page);
        Ok(client)
    }
}

/// Expand a leading `~/` to the current user's home directory
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

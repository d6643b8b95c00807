//! # Configuration Management
//!
//! Loads the hermes configuration file, applies environment overrides and
//! turns the result into the generic [`Notifier`] handed to a provider.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::notifier::{Notifier, NotifierConfiguration, NotifierSecret, ProviderType};

/// Environment variable replacing the configured bearer token
pub const ENV_JIRA_TOKEN: &str = "HERMES_JIRA_TOKEN";

/// Environment variable replacing the configured API base URL
pub const ENV_JIRA_BASE_URL: &str = "HERMES_JIRA_BASE_URL";

/// Per-request timeout used when the configuration does not set one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Represents the configuration directories for hermes
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", "hermes").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Get the path to the default configuration file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

/// HTTP client settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub base_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub timeout_secs: Option<u64>,
}

impl ClientSettings {
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
  }
}

/// The notifier section of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotifierSettings {
  #[serde(default)]
  pub id: String,
  #[serde(flatten)]
  pub config: NotifierConfiguration,
}

/// Contents of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HermesConfig {
  #[serde(default)]
  pub client: ClientSettings,
  #[serde(default)]
  pub notifier: NotifierSettings,
}

impl HermesConfig {
  /// Load configuration from `path`, falling back to defaults when the file
  /// does not exist
  pub fn load(path: &Path) -> Result<Self> {
    if !path.exists() {
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: HermesConfig =
      toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))?;

    config.validate()?;
    Ok(config)
  }

  /// Load configuration from `path` and apply overrides from the process
  /// environment
  pub fn load_with_env(path: &Path) -> Result<Self> {
    let mut config = Self::load(path)?;
    config.apply_env_overrides(|key| std::env::var(key).ok());
    config.validate()?;
    Ok(config)
  }

  /// Apply environment overrides read through `lookup`
  pub fn apply_env_overrides<F>(&mut self, lookup: F)
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(token) = lookup(ENV_JIRA_TOKEN).filter(|token| !token.is_empty()) {
      self.notifier.config.secret = Some(NotifierSecret::new(token));
    }
    if let Some(base_url) = lookup(ENV_JIRA_BASE_URL).filter(|url| !url.is_empty()) {
      self.client.base_url = Some(base_url);
    }
  }

  /// Check values that would otherwise only fail on first use
  pub fn validate(&self) -> Result<()> {
    if let Some(base_url) = &self.client.base_url {
      Url::parse(base_url).with_context(|| format!("Invalid client base_url '{base_url}'"))?;
    }
    if self.client.timeout_secs == Some(0) {
      anyhow::bail!("client timeout_secs must be greater than zero");
    }
    Ok(())
  }

  /// The notifier described by this configuration
  pub fn notifier(&self, provider_type: ProviderType) -> Notifier {
    Notifier::new(
      self.notifier.id.clone(),
      provider_type,
      Some(self.notifier.config.clone()),
    )
  }

  /// The configured secret, or an empty one
  pub fn secret(&self) -> NotifierSecret {
    self.notifier.config.secret.clone().unwrap_or_default()
  }

  /// Copy of the configuration with the token hidden, for display
  pub fn redacted(&self) -> Self {
    let mut config = self.clone();
    if let Some(secret) = config.notifier.config.secret.as_mut() {
      if !secret.token.is_empty() {
        secret.token = "<redacted>".to_string();
      }
    }
    config
  }
}

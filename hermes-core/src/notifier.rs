//! # Notifier Configuration
//!
//! Hub-side description of a configured notifier: which provider it targets,
//! the provider's generic options, and the secret used to authenticate.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifies a provider implementation, e.g. `"jira"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderType(pub String);

impl ProviderType {
  pub fn new(name: impl Into<String>) -> Self {
    Self(name.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ProviderType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Credentials attached to a notifier
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifierSecret {
  #[serde(default)]
  pub token: String,
}

impl NotifierSecret {
  pub fn new(token: impl Into<String>) -> Self {
    Self { token: token.into() }
  }

  pub fn is_empty(&self) -> bool {
    self.token.is_empty()
  }
}

impl fmt::Debug for NotifierSecret {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let token = if self.token.is_empty() { "<empty>" } else { "<redacted>" };
    f.debug_struct("NotifierSecret").field("token", &token).finish()
  }
}

/// Generic provider configuration.
///
/// `opts` is left untyped; each provider decodes the keys it understands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotifierConfiguration {
  #[serde(default)]
  pub opts: Map<String, Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub secret: Option<NotifierSecret>,
}

/// A notifier as handed to a provider by the hub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notifier {
  #[serde(default)]
  pub id: String,
  #[serde(rename = "type")]
  pub provider_type: ProviderType,
  #[serde(default)]
  pub config: Option<NotifierConfiguration>,
}

impl Notifier {
  pub fn new(id: impl Into<String>, provider_type: ProviderType, config: Option<NotifierConfiguration>) -> Self {
    Self {
      id: id.into(),
      provider_type,
      config,
    }
  }
}

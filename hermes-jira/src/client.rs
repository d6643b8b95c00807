//! # Jira HTTP Client
//!
//! reqwest-based client for the Jira Cloud REST API behind the Atlassian API
//! gateway. Every call is authenticated with the caller's OAuth bearer token.

use anyhow::{Context, Result};
use hermes_core::{ClientSettings, RemoteError};
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::consts::{DEFAULT_BASE_URL, USER_AGENT};

/// Represents a Jira API client
#[derive(Clone)]
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str) -> Self {
    Self::with_http_client(base_url, Client::new())
  }

  /// Create a Jira client reusing an existing reqwest client
  pub fn with_http_client(base_url: &str, client: Client) -> Self {
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// URL of a REST resource on the given site
  pub(crate) fn site_url(&self, cloud_id: &str, path: &str) -> String {
    format!("{}/ex/jira/{}/rest/api/3/{}", self.base_url, cloud_id, path)
  }

  pub(crate) fn get(&self, url: &str, token: &str) -> RequestBuilder {
    self.authorized(self.client.get(url), token)
  }

  pub(crate) fn post(&self, url: &str, token: &str) -> RequestBuilder {
    self.authorized(self.client.post(url), token)
  }

  fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
    request
      .bearer_auth(token)
      .header(ACCEPT, "application/json")
      .header(reqwest::header::USER_AGENT, USER_AGENT)
  }
}

/// Create a Jira client from the configured client settings
pub fn create_jira_client(settings: &ClientSettings) -> Result<JiraClient> {
  let client = Client::builder()
    .timeout(settings.timeout())
    .build()
    .context("Failed to build HTTP client")?;

  let base_url = settings.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
  Ok(JiraClient::with_http_client(base_url, client))
}

/// Convert a transport failure into a remote error
pub(crate) fn transport_error(action: &str, error: reqwest::Error) -> RemoteError {
  RemoteError::transport(format!("Failed to {action}: {error}"))
}

/// Decode a successful JSON response or map the failure status.
///
/// `resource` names what was requested and is used in error messages.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T, RemoteError> {
  let status = response.status();
  if status.is_success() {
    return response
      .json::<T>()
      .await
      .map_err(|e| RemoteError::transport(format!("Failed to parse {resource}: {e}")));
  }

  Err(status_error(response, resource).await)
}

/// Map a non-success response to a remote error
pub(crate) async fn status_error(response: Response, resource: &str) -> RemoteError {
  let status = response.status();
  match status {
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RemoteError::with_status(
      status.as_u16(),
      "Authentication failed. Please check your Jira credentials.",
    ),
    StatusCode::NOT_FOUND => RemoteError::with_status(status.as_u16(), format!("{resource} not found")),
    _ => RemoteError::with_status(
      status.as_u16(),
      format!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      ),
    ),
  }
}

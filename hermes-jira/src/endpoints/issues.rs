//! # Jira Issue Endpoints
//!
//! Issue creation on a Jira Cloud site.

use hermes_core::RemoteError;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::instrument;

use crate::client::{JiraClient, read_json, status_error, transport_error};
use crate::models::CreateIssueRequest;

impl JiraClient {
  /// Create an issue and return the raw response (`id`, `key`, `self`)
  #[instrument(skip(self, request), fields(cloud_id = %request.cloud_id), level = "debug")]
  pub async fn create_issue(&self, request: &CreateIssueRequest) -> Result<Value, RemoteError> {
    let url = self.site_url(&request.cloud_id, "issue");

    let response = self
      .post(&url, &request.bearer_token)
      .json(request)
      .send()
      .await
      .map_err(|e| transport_error("create Jira issue", e))?;

    match response.status() {
      StatusCode::BAD_REQUEST => Err(RemoteError::with_status(
        StatusCode::BAD_REQUEST.as_u16(),
        format!(
          "Jira rejected the issue: {}",
          response.text().await.unwrap_or_default()
        ),
      )),
      StatusCode::NOT_FOUND => Err(status_error(response, &format!("Site {}", request.cloud_id)).await),
      _ => read_json(response, "created issue").await,
    }
  }
}

use hermes_core::RemoteError;
use tracing::instrument;

use crate::client::{JiraClient, read_json, transport_error};
use crate::models::AccessibleResource;

impl JiraClient {
  /// Get the Jira Cloud sites the token has access to
  #[instrument(skip_all, level = "debug")]
  pub async fn get_accessible_resources(&self, token: &str) -> Result<Vec<AccessibleResource>, RemoteError> {
    let url = format!("{}/oauth/token/accessible-resources", self.base_url);

    let response = self
      .get(&url, token)
      .send()
      .await
      .map_err(|e| transport_error("fetch accessible resources", e))?;

    read_json(response, "Accessible resources").await
  }
}

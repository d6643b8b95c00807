use hermes_core::RemoteError;
use tracing::instrument;

use crate::client::{JiraClient, read_json, transport_error};
use crate::models::IssueTypeDetails;

impl JiraClient {
  /// Get all issue types visible on a site
  #[instrument(skip(self, token), level = "debug")]
  pub async fn get_issue_types(&self, token: &str, cloud_id: &str) -> Result<Vec<IssueTypeDetails>, RemoteError> {
    let url = self.site_url(cloud_id, "issuetype");

    let response = self
      .get(&url, token)
      .send()
      .await
      .map_err(|e| transport_error("fetch Jira issue types", e))?;

    read_json(response, &format!("Issue types for site {cloud_id}")).await
  }
}

use hermes_core::RemoteError;
use tracing::{debug, instrument};

use crate::client::{JiraClient, read_json, transport_error};
use crate::models::{ProjectDetails, ProjectSearchPage};

impl JiraClient {
  /// Get the projects on a site.
  ///
  /// Only the first page of the project search is returned.
  #[instrument(skip(self, token), level = "debug")]
  pub async fn get_projects(&self, token: &str, cloud_id: &str) -> Result<Vec<ProjectDetails>, RemoteError> {
    let url = self.site_url(cloud_id, "project/search");

    let response = self
      .get(&url, token)
      .send()
      .await
      .map_err(|e| transport_error("fetch Jira projects", e))?;

    let page: ProjectSearchPage = read_json(response, &format!("Projects for site {cloud_id}")).await?;
    if page.is_last == Some(false) {
      debug!(cloud_id, returned = page.values.len(), "Project list truncated to the first page");
    }
    Ok(page.values)
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{bearer_token, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;

  #[tokio::test]
  async fn test_get_projects() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/ex/jira/site1/rest/api/3/project/search"))
      .and(bearer_token("test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "startAt": 0,
          "maxResults": 50,
          "total": 1,
          "isLast": true,
          "values": [
              { "id": "10000", "key": "OPS", "name": "Operations" }
          ]
      })))
      .mount(&mock_server)
      .await;

    let projects = client.get_projects("test_token", "site1").await?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].key, "OPS");
    assert_eq!(projects[0].id, "10000");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_projects_returns_first_page_only() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/ex/jira/site1/rest/api/3/project/search"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "startAt": 0,
          "maxResults": 1,
          "total": 2,
          "isLast": false,
          "nextPage": "https://api.atlassian.com/ex/jira/site1/rest/api/3/project/search?startAt=1",
          "values": [
              { "id": "10000", "key": "OPS", "name": "Operations" }
          ]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let projects = client.get_projects("test_token", "site1").await?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].key, "OPS");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_projects_server_error() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = JiraClient::new(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/ex/jira/site1/rest/api/3/project/search"))
      .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
      .mount(&mock_server)
      .await;

    let error = client.get_projects("test_token", "site1").await.unwrap_err();
    assert_eq!(error.status, Some(500));
    assert!(error.message.contains("HTTP 500"));
    assert!(error.message.contains("upstream exploded"));

    Ok(())
  }
}

//! # Remote Client Contract
//!
//! The Jira operations the provider depends on. [`JiraClient`] is the HTTP
//! implementation; tests substitute their own.

use async_trait::async_trait;
use hermes_core::RemoteError;
use serde_json::Value;

use crate::client::JiraClient;
use crate::models::{AccessibleResource, CreateIssueRequest, IssueTypeDetails, ProjectDetails};

#[async_trait]
pub trait JiraApi: Send + Sync {
  /// Create an issue; the response is returned untouched
  async fn create_issue(&self, request: &CreateIssueRequest) -> Result<Value, RemoteError>;

  /// Sites reachable with `token`
  async fn accessible_resources(&self, token: &str) -> Result<Vec<AccessibleResource>, RemoteError>;

  async fn issue_types(&self, token: &str, cloud_id: &str) -> Result<Vec<IssueTypeDetails>, RemoteError>;

  async fn projects(&self, token: &str, cloud_id: &str) -> Result<Vec<ProjectDetails>, RemoteError>;
}

#[async_trait]
impl JiraApi for JiraClient {
  async fn create_issue(&self, request: &CreateIssueRequest) -> Result<Value, RemoteError> {
    JiraClient::create_issue(self, request).await
  }

  async fn accessible_resources(&self, token: &str) -> Result<Vec<AccessibleResource>, RemoteError> {
    self.get_accessible_resources(token).await
  }

  async fn issue_types(&self, token: &str, cloud_id: &str) -> Result<Vec<IssueTypeDetails>, RemoteError> {
    self.get_issue_types(token, cloud_id).await
  }

  async fn projects(&self, token: &str, cloud_id: &str) -> Result<Vec<ProjectDetails>, RemoteError> {
    self.get_projects(token, cloud_id).await
  }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Jira Cloud site the bearer token has access to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessibleResource {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub url: String,
  #[serde(default)]
  pub scopes: Vec<String>,
  #[serde(rename = "avatarUrl", default)]
  pub avatar_url: Option<String>,
}

/// Represents a Jira issue type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueTypeDetails {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub subtask: bool,
}

/// Represents a Jira project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectDetails {
  pub id: String,
  pub key: String,
  pub name: String,
}

/// One page of the project search endpoint
#[derive(Debug, Deserialize)]
pub struct ProjectSearchPage {
  #[serde(default)]
  pub values: Vec<ProjectDetails>,
  #[serde(rename = "isLast", default)]
  pub is_last: Option<bool>,
}

/// Project reference in an issue creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRef {
  pub key: String,
}

/// Issue type reference in an issue creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueTypeRef {
  pub name: String,
}

/// Fields of a new issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueFields {
  pub project: ProjectRef,
  #[serde(rename = "issuetype")]
  pub issue_type: IssueTypeRef,
  pub summary: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<Map<String, Value>>,
}

/// Issue creation request.
///
/// Only `fields` is sent as the body; the site and token select the endpoint
/// and authenticate the call.
#[derive(Clone, PartialEq, Serialize)]
pub struct CreateIssueRequest {
  pub fields: IssueFields,
  #[serde(skip)]
  pub cloud_id: String,
  #[serde(skip)]
  pub bearer_token: String,
}

impl fmt::Debug for CreateIssueRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CreateIssueRequest")
      .field("fields", &self.fields)
      .field("cloud_id", &self.cloud_id)
      .field("bearer_token", &"<redacted>")
      .finish()
  }
}

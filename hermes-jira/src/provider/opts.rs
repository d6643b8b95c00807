use hermes_core::{NotifierConfiguration, NotifierSecret, ProviderError};
use serde_json::{Map, Value};

use crate::models::{CreateIssueRequest, IssueFields, IssueTypeRef, ProjectRef};
use crate::provider::Payload;

pub const PROJECT_KEY: &str = "project_key";
pub const ISSUE_TYPE: &str = "issue_type";
pub const CLOUD_ID: &str = "cloud_id";

/// Jira specific options decoded from a notifier configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JiraOpts {
  pub secret: Option<NotifierSecret>,
  pub project_key: String,
  pub issue_type: String,
  pub cloud_id: String,
}

impl JiraOpts {
  /// Decode the options from a generic configuration.
  ///
  /// Missing keys decode to empty strings; keys holding anything other than
  /// a string are reported together in one decode error.
  pub fn extract(config: Option<&NotifierConfiguration>) -> Result<Self, ProviderError> {
    let config = config.ok_or_else(|| ProviderError::Decode("notifier config empty".to_string()))?;

    let mut mismatched = Vec::new();
    let project_key = decode_string(&config.opts, PROJECT_KEY, &mut mismatched);
    let issue_type = decode_string(&config.opts, ISSUE_TYPE, &mut mismatched);
    let cloud_id = decode_string(&config.opts, CLOUD_ID, &mut mismatched);

    if !mismatched.is_empty() {
      return Err(ProviderError::Decode(mismatched.join("; ")));
    }

    Ok(Self {
      secret: config.secret.clone(),
      project_key,
      issue_type,
      cloud_id,
    })
  }

  /// Ensure all mandatory options and the secret are set
  pub fn validate(&self) -> Result<(), ProviderError> {
    let missing: Vec<&str> = [(PROJECT_KEY, &self.project_key), (ISSUE_TYPE, &self.issue_type)]
      .into_iter()
      .filter(|(_, value)| value.is_empty())
      .map(|(name, _)| name)
      .collect();
    if !missing.is_empty() {
      return Err(ProviderError::options_validation(format!(
        "mandatory option {} is empty",
        missing.join(" and ")
      )));
    }

    if self.token().is_empty() {
      return Err(ProviderError::options_validation("secret not defined in configuration"));
    }
    Ok(())
  }

  /// The bearer token, empty when no secret is configured
  pub fn token(&self) -> &str {
    self.secret.as_ref().map(|secret| secret.token.as_str()).unwrap_or_default()
  }

  /// Build the issue creation request for `payload`
  pub fn issue_request(&self, payload: &Payload) -> CreateIssueRequest {
    CreateIssueRequest {
      fields: IssueFields {
        project: ProjectRef {
          key: self.project_key.clone(),
        },
        issue_type: IssueTypeRef {
          name: self.issue_type.clone(),
        },
        summary: payload.summary.clone(),
        description: payload.description.clone(),
      },
      cloud_id: self.cloud_id.clone(),
      bearer_token: self.token().to_string(),
    }
  }
}

fn decode_string(opts: &Map<String, Value>, key: &str, mismatched: &mut Vec<String>) -> String {
  match opts.get(key) {
    None | Some(Value::Null) => String::new(),
    Some(Value::String(value)) => value.clone(),
    Some(other) => {
      mismatched.push(format!("{key}: expected a string, found {}", json_type(other)));
      String::new()
    }
  }
}

const fn json_type(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

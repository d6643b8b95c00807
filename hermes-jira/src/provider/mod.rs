//! # Jira Provider
//!
//! Turns hub notifications into Jira issues and lists the sites, projects and
//! issue types a token can use, for configuring the provider.

mod opts;
mod payload;

use std::sync::Arc;

use async_trait::async_trait;
use hermes_core::{Message, Notifier, NotifierSecret, OptValue, OptValues, Provider, ProviderError, ProviderType};
pub use opts::{CLOUD_ID, ISSUE_TYPE, JiraOpts, PROJECT_KEY};
pub use payload::Payload;
use tracing::instrument;

use crate::api::JiraApi;
use crate::consts::PROVIDER_TYPE;

/// Jira notification provider
#[derive(Clone)]
pub struct JiraProvider {
  client: Arc<dyn JiraApi>,
}

impl JiraProvider {
  pub fn new(client: impl JiraApi + 'static) -> Self {
    Self {
      client: Arc::new(client),
    }
  }

  pub fn with_shared_client(client: Arc<dyn JiraApi>) -> Self {
    Self { client }
  }

  /// Validate `body` and the notifier options, then create the issue.
  ///
  /// Nothing is sent to Jira unless both the payload and the options are
  /// valid. Client errors are returned as they are.
  pub async fn create_issue(&self, notifier: &Notifier, body: &[u8]) -> Result<Message<Payload>, ProviderError> {
    let payload = Payload::extract(body)?;
    payload.validate()?;

    let opts = JiraOpts::extract(notifier.config.as_ref())?;
    opts.validate()?;

    let request = opts.issue_request(&payload);
    let response = self.client.create_issue(&request).await?;

    Ok(Message::delivered(payload, response))
  }

  /// Walk every accessible site and collect its projects and issue types.
  ///
  /// The first failing call aborts the walk; no partial result is returned.
  pub async fn discover(&self, secret: &NotifierSecret) -> Result<OptValues, ProviderError> {
    if secret.is_empty() {
      return Err(ProviderError::options_validation("secret token is empty"));
    }
    let token = secret.token.as_str();

    let sites = self.client.accessible_resources(token).await?;

    let mut result = OptValues::with_parent(CLOUD_ID);
    for site in sites {
      result.push_value(CLOUD_ID, OptValue::new(&site.id, &site.name));

      let issue_types = self
        .client
        .issue_types(token, &site.id)
        .await?
        .into_iter()
        .map(|issue_type| OptValue::new(issue_type.id, issue_type.name))
        .collect();

      // Projects are selected by key, so the key stands in for the id
      let projects = self
        .client
        .projects(token, &site.id)
        .await?
        .into_iter()
        .map(|project| OptValue::new(project.key, project.name))
        .collect();

      result.relate(CLOUD_ID, &site.id, PROJECT_KEY, projects);
      result.relate(CLOUD_ID, &site.id, ISSUE_TYPE, issue_types);
    }

    Ok(result)
  }
}

#[async_trait]
impl Provider for JiraProvider {
  type Payload = Payload;

  fn provider_type(&self) -> ProviderType {
    ProviderType::new(PROVIDER_TYPE)
  }

  #[instrument(skip_all, fields(provider = PROVIDER_TYPE, notifier = %notifier.id), err(level = "warn"))]
  async fn send(&self, notifier: &Notifier, body: &[u8]) -> Result<Message<Payload>, ProviderError> {
    self.create_issue(notifier, body).await
  }

  #[instrument(skip_all, fields(provider = PROVIDER_TYPE), err(level = "warn"))]
  async fn get_opt_values(&self, secret: &NotifierSecret) -> Result<OptValues, ProviderError> {
    self.discover(secret).await
  }
}

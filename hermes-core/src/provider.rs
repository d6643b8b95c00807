use async_trait::async_trait;
use serde::Serialize;

use crate::error::ProviderError;
use crate::message::Message;
use crate::notifier::{Notifier, NotifierSecret, ProviderType};
use crate::opt_values::OptValues;

/// A notification provider: delivers notifications to one external service
/// and describes the configuration values that service accepts.
#[async_trait]
pub trait Provider: Send + Sync {
  /// Validated payload echoed back in the [`Message`]
  type Payload: Serialize + Send;

  fn provider_type(&self) -> ProviderType;

  /// Deliver `body` using the notifier's configuration
  async fn send(&self, notifier: &Notifier, body: &[u8]) -> Result<Message<Self::Payload>, ProviderError>;

  /// Enumerate the option values available to the holder of `secret`
  async fn get_opt_values(&self, secret: &NotifierSecret) -> Result<OptValues, ProviderError>;
}

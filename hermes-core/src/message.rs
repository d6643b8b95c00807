use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Result of a successful send
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message<P> {
  pub id: String,
  pub ok: bool,
  pub payload: P,
  pub provider_response: Value,
}

impl<P> Message<P> {
  /// Build a successful message with a freshly generated id
  pub fn delivered(payload: P, provider_response: Value) -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      ok: true,
      payload,
      provider_response,
    }
  }
}

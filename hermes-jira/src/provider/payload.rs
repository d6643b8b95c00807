use hermes_core::ProviderError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Notification content for the Jira provider.
///
/// `description` is an Atlassian Document Format document; its structure is
/// passed through to Jira unchecked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub summary: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<Map<String, Value>>,
}

impl Payload {
  /// Parse a request body.
  ///
  /// The body must be a JSON object. A bare `null` yields an empty payload,
  /// which then fails validation.
  pub fn extract(body: &[u8]) -> Result<Self, ProviderError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
    match value {
      Value::Null => Ok(Self::default()),
      Value::Object(map) => serde_json::from_value(Value::Object(map)).map_err(|e| ProviderError::Parse(e.to_string())),
      other => Err(ProviderError::Parse(format!(
        "expected a JSON object, found {}",
        json_type_name(&other)
      ))),
    }
  }

  /// Ensure all mandatory properties are set
  pub fn validate(&self) -> Result<(), ProviderError> {
    if self.summary.is_empty() {
      return Err(ProviderError::payload_validation(
        "payload does not contain mandatory param summary",
      ));
    }
    if self.description.is_none() {
      return Err(ProviderError::payload_validation(
        "payload does not contain mandatory param description",
      ));
    }
    Ok(())
  }
}

const fn json_type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use hermes_core::{ErrorKind, ValidationTarget};
  use serde_json::json;

  use super::*;

  #[test]
  fn test_extract_valid_payload() {
    let payload = Payload::extract(br#"{"summary":"Bug","description":{"type":"doc"}}"#).unwrap();

    assert_eq!(payload.summary, "Bug");
    assert_eq!(payload.description, json!({ "type": "doc" }).as_object().cloned());
    assert!(payload.validate().is_ok());
  }

  #[test]
  fn test_extract_malformed_body() {
    let bodies: [&[u8]; 5] = [b"{", b"not json", b"[]", br#"{"summary": 3}"#, br#"{"description": "text"}"#];
    for body in bodies {
      let error = Payload::extract(body).unwrap_err();
      assert_eq!(error.kind(), ErrorKind::Parse, "body: {}", String::from_utf8_lossy(body));
    }
  }

  #[test]
  fn test_extract_rejects_non_object_body() {
    let bodies: [&[u8]; 4] = [b"[]", br#"["Bug", {"type":"doc"}]"#, br#""Bug""#, b"42"];
    for body in bodies {
      let error = Payload::extract(body).unwrap_err();
      assert_eq!(error.kind(), ErrorKind::Parse, "body: {}", String::from_utf8_lossy(body));
      assert!(error.message().starts_with("expected a JSON object"));
    }
  }

  #[test]
  fn test_null_body_fails_validation() {
    let payload = Payload::extract(b"null").unwrap();

    assert_eq!(payload, Payload::default());
    let error = payload.validate().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(error.message().contains("summary"));
  }

  #[test]
  fn test_missing_summary_fails_validation() {
    let payload = Payload::extract(br#"{"description":{"type":"doc"}}"#).unwrap();
    let error = payload.validate().unwrap_err();

    assert!(matches!(
      error,
      ProviderError::Validation {
        target: ValidationTarget::Payload,
        ..
      }
    ));
    assert!(error.message().contains("summary"));
  }

  #[test]
  fn test_null_summary_fails_validation() {
    let payload = Payload::extract(br#"{"summary":null,"description":{"type":"doc"}}"#).unwrap();
    assert_eq!(payload.validate().unwrap_err().kind(), ErrorKind::Validation);
  }

  #[test]
  fn test_missing_or_null_description_fails_validation() {
    let bodies: [&[u8]; 2] = [br#"{"summary":"Bug"}"#, br#"{"summary":"Bug","description":null}"#];
    for body in bodies {
      let error = Payload::extract(body).unwrap().validate().unwrap_err();
      assert!(error.message().contains("description"));
    }
  }

  #[test]
  fn test_description_structure_is_not_checked() {
    let payload = Payload::extract(br#"{"summary":"Bug","description":{}}"#).unwrap();
    assert!(payload.validate().is_ok());
  }

  #[test]
  fn test_payload_echo_serialization() {
    let payload = Payload::extract(br#"{"summary":"Bug","description":{"type":"doc"},"extra":1}"#).unwrap();

    assert_eq!(
      serde_json::to_value(&payload).unwrap(),
      json!({ "summary": "Bug", "description": { "type": "doc" } })
    );
  }
}

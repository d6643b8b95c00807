//! # Provider Errors
//!
//! The closed set of failures a notification provider can report. Local
//! failures (parse, validation, decode) are raised before any remote call;
//! remote failures originate from a provider's client and are passed through
//! untouched.

use std::fmt;

use thiserror::Error;

/// Which object failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationTarget {
  /// The inbound notification payload
  Payload,
  /// The provider options decoded from the notifier configuration
  Options,
}

impl fmt::Display for ValidationTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValidationTarget::Payload => f.write_str("payload"),
      ValidationTarget::Options => f.write_str("options"),
    }
  }
}

/// Coarse classification of a [`ProviderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  Parse,
  Validation,
  Decode,
  Remote,
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      ErrorKind::Parse => "parse",
      ErrorKind::Validation => "validation",
      ErrorKind::Decode => "decode",
      ErrorKind::Remote => "remote",
    };
    f.write_str(name)
  }
}

/// Failure reported by a remote API client.
///
/// `status` is the upstream HTTP status when a response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteError {
  pub status: Option<u16>,
  pub message: String,
}

impl RemoteError {
  /// Error for a response the upstream service answered with `status`
  pub fn with_status(status: u16, message: impl Into<String>) -> Self {
    Self {
      status: Some(status),
      message: message.into(),
    }
  }

  /// Error raised before or while reading a response (transport, decoding)
  pub fn transport(message: impl Into<String>) -> Self {
    Self {
      status: None,
      message: message.into(),
    }
  }
}

/// Errors returned by provider operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
  /// The request body is not well-formed or has the wrong shape
  #[error("failed to parse request body: {0}")]
  Parse(String),

  /// A mandatory field is missing or empty
  #[error("{target} validation failed: {message}")]
  Validation { target: ValidationTarget, message: String },

  /// The notifier configuration is absent or cannot be decoded
  #[error("failed to decode notifier configuration: {0}")]
  Decode(String),

  /// The remote service call failed
  #[error(transparent)]
  Remote(#[from] RemoteError),
}

impl ProviderError {
  pub fn payload_validation(message: impl Into<String>) -> Self {
    ProviderError::Validation {
      target: ValidationTarget::Payload,
      message: message.into(),
    }
  }

  pub fn options_validation(message: impl Into<String>) -> Self {
    ProviderError::Validation {
      target: ValidationTarget::Options,
      message: message.into(),
    }
  }

  pub const fn kind(&self) -> ErrorKind {
    match self {
      ProviderError::Parse(_) => ErrorKind::Parse,
      ProviderError::Validation { .. } => ErrorKind::Validation,
      ProviderError::Decode(_) => ErrorKind::Decode,
      ProviderError::Remote(_) => ErrorKind::Remote,
    }
  }

  /// HTTP-style status code suitable for reporting the failure to a caller.
  ///
  /// Remote errors without an upstream response report 502.
  pub fn status_code(&self) -> u16 {
    match self {
      ProviderError::Parse(_) | ProviderError::Validation { .. } | ProviderError::Decode(_) => 400,
      ProviderError::Remote(remote) => remote.status.unwrap_or(502),
    }
  }

  /// The bare message, without the kind prefix used by `Display`
  pub fn message(&self) -> &str {
    match self {
      ProviderError::Parse(message) | ProviderError::Decode(message) => message,
      ProviderError::Validation { message, .. } => message,
      ProviderError::Remote(remote) => &remote.message,
    }
  }

  /// Whether the failure was detected locally, before any remote call
  pub const fn is_local(&self) -> bool {
    !matches!(self, ProviderError::Remote(_))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_local_errors_report_bad_request() {
    let errors = [
      ProviderError::Parse("unexpected end of input".to_string()),
      ProviderError::payload_validation("summary is empty"),
      ProviderError::options_validation("issue_type is empty"),
      ProviderError::Decode("notifier config empty".to_string()),
    ];

    for error in errors {
      assert_eq!(error.status_code(), 400);
      assert!(error.is_local());
    }
  }

  #[test]
  fn test_remote_error_keeps_upstream_status() {
    let error: ProviderError = RemoteError::with_status(404, "Project OPS not found").into();

    assert_eq!(error.kind(), ErrorKind::Remote);
    assert_eq!(error.status_code(), 404);
    assert_eq!(error.message(), "Project OPS not found");
    assert_eq!(error.to_string(), "Project OPS not found");
    assert!(!error.is_local());
  }

  #[test]
  fn test_remote_transport_error_reports_bad_gateway() {
    let error = ProviderError::from(RemoteError::transport("connection refused"));
    assert_eq!(error.status_code(), 502);
  }

  #[test]
  fn test_validation_display_names_target() {
    let error = ProviderError::payload_validation("summary is empty");
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(error.message(), "summary is empty");
    assert_eq!(error.to_string(), "payload validation failed: summary is empty");

    let error = ProviderError::options_validation("secret not defined in configuration");
    assert_eq!(
      error.to_string(),
      "options validation failed: secret not defined in configuration"
    );
  }
}

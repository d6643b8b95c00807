//! Constants for the hermes-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("hermes/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Atlassian API gateway serving OAuth 2.0 (3LO) requests
pub const DEFAULT_BASE_URL: &str = "https://api.atlassian.com";

/// Provider type under which the hub registers this provider
pub const PROVIDER_TYPE: &str = "jira";

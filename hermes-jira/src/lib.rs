//! # Jira Notification Provider
//!
//! Creates Jira Cloud issues from hub notifications and discovers the sites,
//! projects and issue types available to an OAuth token. The provider talks to
//! Jira through the [`JiraApi`] trait; [`JiraClient`] implements it over the
//! Atlassian REST API.

pub mod api;
mod client;
pub mod consts;
mod endpoints;
pub mod models;
pub mod provider;

pub use api::JiraApi;
// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export models
pub use models::{
  AccessibleResource, CreateIssueRequest, IssueFields, IssueTypeDetails, IssueTypeRef, ProjectDetails, ProjectRef,
};
pub use provider::{JiraOpts, JiraProvider, Payload};

//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by resource: issue creation, accessible
//! sites, issue types and projects.

pub mod issue_types;
pub mod issues;
pub mod projects;
pub mod resources;

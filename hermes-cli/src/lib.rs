//! # Hermes CLI Library
//!
//! Command definitions and handlers for the hermes command-line tool.

pub mod cli;

pub use cli::{Cli, handle_cli};

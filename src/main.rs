//! # Hermes Entry Point
//!
//! Parses arguments, sets up tracing, and dispatches to the command handlers.
//! Provider failures are reported as `<kind> error (<status>): <message>`.

use std::process::ExitCode;

use clap::Parser;
use hermes_cli::{Cli, handle_cli};
use hermes_core::{ProviderError, format_provider_error, print_error};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
  let cmd = Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  match handle_cli(cmd) {
    Ok(()) => ExitCode::SUCCESS,
    Err(error) => {
      match error.downcast_ref::<ProviderError>() {
        Some(provider_error) => print_error(&format_provider_error(provider_error)),
        None => print_error(&format!("{error:#}")),
      }
      ExitCode::FAILURE
    }
  }
}

//! # Discover Command
//!
//! Prints the option values available to the configured token.

use anyhow::{Context, Result};
use hermes_core::Provider;
use tracing::info;

use super::CommandContext;

pub(crate) fn handle_discover_command(context: &CommandContext) -> Result<()> {
  let config = context.load_config()?;
  let secret = config.secret();
  let provider = context.provider(&config)?;

  let values = context.run(provider.get_opt_values(&secret))?;
  info!(sites = values.values("cloud_id").len(), "Discovery complete");

  let output = serde_json::to_string_pretty(&values).context("Failed to serialize option values")?;
  println!("{output}");
  Ok(())
}

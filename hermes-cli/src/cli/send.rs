//! # Send Command
//!
//! Reads a notification body and creates a Jira issue from it with the
//! configured notifier.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use hermes_core::{Provider, ProviderType};
use hermes_jira::consts::PROVIDER_TYPE;
use tracing::info;

use super::CommandContext;

/// Command for sending a notification
#[derive(Args)]
pub struct SendArgs {
  /// File containing the JSON notification body ('-' reads stdin)
  #[arg(long, short = 'b', value_name = "FILE")]
  pub body: Option<PathBuf>,
}

pub(crate) fn handle_send_command(context: &CommandContext, args: SendArgs) -> Result<()> {
  let body = read_body(args.body.as_deref())?;
  let config = context.load_config()?;
  let notifier = config.notifier(ProviderType::new(PROVIDER_TYPE));
  let provider = context.provider(&config)?;

  let message = context.run(provider.send(&notifier, &body))?;
  info!(message_id = %message.id, "Notification delivered");

  let output = serde_json::to_string_pretty(&message).context("Failed to serialize message")?;
  println!("{output}");
  Ok(())
}

fn read_body(path: Option<&Path>) -> Result<Vec<u8>> {
  match path {
    Some(path) if path != Path::new("-") => {
      fs::read(path).with_context(|| format!("Failed to read notification body from {}", path.display()))
    }
    _ => {
      let mut body = Vec::new();
      io::stdin()
        .read_to_end(&mut body)
        .context("Failed to read notification body from stdin")?;
      Ok(body)
    }
  }
}

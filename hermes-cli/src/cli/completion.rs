//! # Completion Command
//!
//! Generates shell completion scripts.

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{Shell, generate};

use super::Cli;

/// Command for generating shell completions
#[derive(Args)]
pub struct CompletionArgs {
  /// Shell to generate completions for
  #[arg(required = true, value_enum)]
  pub shell: Shell,
}

pub(crate) fn handle_completion_command(completion: CompletionArgs) -> Result<()> {
  let mut command = Cli::command();
  let name = command.get_name().to_string();
  generate(completion.shell, &mut command, name, &mut io::stdout());
  Ok(())
}

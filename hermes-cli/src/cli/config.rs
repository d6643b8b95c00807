//! # Config Command
//!
//! Shows where the configuration lives and what it resolves to.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use hermes_core::print_warning;

use super::CommandContext;

/// Command for inspecting the configuration
#[derive(Args)]
pub struct ConfigArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ConfigSubcommands,
}

/// Subcommands for the config command
#[derive(Subcommand)]
pub enum ConfigSubcommands {
  /// Print the path of the configuration file
  Path,

  /// Print the resolved configuration with the token redacted
  #[command(long_about = "Print the resolved configuration with the token redacted.\n\n\
                      Environment overrides (HERMES_JIRA_TOKEN, HERMES_JIRA_BASE_URL)\n\
                      are applied before printing.")]
  Show,
}

pub(crate) fn handle_config_command(context: &CommandContext, args: ConfigArgs) -> Result<()> {
  match args.subcommand {
    ConfigSubcommands::Path => {
      let path = context.config_path()?;
      if !path.exists() {
        print_warning(&format!("{} does not exist yet; defaults are in effect", path.display()));
      }
      println!("{}", path.display());
      Ok(())
    }
    ConfigSubcommands::Show => {
      let config = context.load_config()?;
      let output = toml::to_string_pretty(&config.redacted()).context("Failed to render configuration")?;
      print!("{output}");
      Ok(())
    }
  }
}

//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for hermes: sending a
//! notification through the Jira provider, discovering configuration values,
//! and inspecting the configuration file.

mod completion;
mod config;
mod discover;
mod send;

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use hermes_core::config::get_config_dirs;
use hermes_core::{ColorMode, HermesConfig, ProviderError};
use hermes_jira::{JiraProvider, create_jira_client};
use tokio::runtime::Runtime;
use tracing::debug;

/// Top-level CLI command for hermes
#[derive(Parser)]
#[command(name = "hermes")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Send notifications to Jira and discover Jira configuration values")]
#[command(
  long_about = "Hermes turns notifications into Jira Cloud issues.\n\n\
        It validates a notification body against the configured notifier, creates the\n\
        issue through the Atlassian API, and can list the sites, projects and issue\n\
        types a token has access to."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Path to the configuration file (defaults to the user config directory)
  #[arg(long, global = true, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// Abort remote operations that take longer than this many seconds
  #[arg(long, global = true, value_name = "SECS", default_value_t = 60)]
  pub timeout: u64,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    global = true,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for hermes
#[derive(Subcommand)]
pub enum Commands {
  /// Create a Jira issue from a notification body
  #[command(long_about = "Create a Jira issue from a notification body.\n\n\
            The body is a JSON object with a 'summary' string and a 'description'\n\
            Atlassian document. It is read from --body, or from stdin when --body is\n\
            omitted or '-'. The resulting message is printed as JSON.")]
  Send(send::SendArgs),

  /// List the sites, projects and issue types available to the token
  #[command(long_about = "List the sites, projects and issue types available to the token.\n\n\
            Prints the values accepted by the cloud_id, project_key and issue_type\n\
            options as JSON, with projects and issue types grouped by site.")]
  #[command(alias = "opts")]
  Discover,

  /// Inspect the configuration file
  #[command(arg_required_else_help = true)]
  Config(config::ConfigArgs),

  /// Generate shell completions
  Completion(completion::CompletionArgs),
}

/// Handles the parsed CLI command
pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let context = CommandContext {
    config_path: cli.config,
    timeout: Duration::from_secs(cli.timeout),
  };

  match cli.command {
    Commands::Send(args) => send::handle_send_command(&context, args),
    Commands::Discover => discover::handle_discover_command(&context),
    Commands::Config(args) => config::handle_config_command(&context, args),
    Commands::Completion(args) => completion::handle_completion_command(args),
  }
}

/// Settings shared by every command
pub(crate) struct CommandContext {
  config_path: Option<PathBuf>,
  timeout: Duration,
}

impl CommandContext {
  pub(crate) fn config_path(&self) -> Result<PathBuf> {
    match &self.config_path {
      Some(path) => Ok(path.clone()),
      None => Ok(get_config_dirs()?.config_path()),
    }
  }

  pub(crate) fn load_config(&self) -> Result<HermesConfig> {
    let path = self.config_path()?;
    debug!(path = %path.display(), "Loading configuration");
    HermesConfig::load_with_env(&path)
  }

  pub(crate) fn provider(&self, config: &HermesConfig) -> Result<JiraProvider> {
    let client = create_jira_client(&config.client)?;
    debug!(base_url = client.base_url(), "Jira client ready");
    Ok(JiraProvider::new(client))
  }

  /// Run a provider operation to completion, giving up on Ctrl-C or when
  /// the timeout elapses. Either way the in-flight request is dropped.
  pub(crate) fn run<F, T>(&self, operation: F) -> Result<T>
  where
    F: Future<Output = Result<T, ProviderError>>,
  {
    let rt = Runtime::new().context("Failed to create async runtime")?;
    let timeout = self.timeout;

    rt.block_on(async move {
      tokio::select! {
        result = tokio::time::timeout(timeout, operation) => match result {
          Ok(outcome) => outcome.map_err(anyhow::Error::from),
          Err(_) => Err(anyhow!("Operation timed out after {}s", timeout.as_secs())),
        },
        _ = tokio::signal::ctrl_c() => Err(anyhow!("Interrupted")),
      }
    })
  }
}

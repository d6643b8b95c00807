//! # Output Formatting
//!
//! Colored status lines for user-facing terminal output.

use owo_colors::{OwoColorize, Stream};

use crate::error::ProviderError;

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply this mode to all subsequent colored output
  pub fn apply(self) {
    match self {
      ColorMode::Yes | ColorMode::Always => owo_colors::set_override(true),
      ColorMode::No | ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Auto => owo_colors::unset_override(),
    }
  }
}

/// Print an error message
pub fn print_error(message: &str) {
  eprintln!("{} {}", "✗".if_supports_color(Stream::Stderr, |s| s.red()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  eprintln!("{} {}", "⚠".if_supports_color(Stream::Stderr, |s| s.yellow()), message);
}

/// One-line description of a provider failure, e.g.
/// `validation error (400): summary is empty`
pub fn format_provider_error(error: &ProviderError) -> String {
  format!("{} error ({}): {}", error.kind(), error.status_code(), error.message())
}

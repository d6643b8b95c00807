//! # Hermes Core Library
//!
//! Provider-agnostic building blocks shared by hermes notification providers:
//! the notifier configuration model, result messages, discovery results, the
//! provider error taxonomy and the [`Provider`] trait itself.

pub mod config;
pub mod error;
pub mod message;
pub mod notifier;
pub mod opt_values;
pub mod output;
pub mod provider;

pub use config::{ClientSettings, ConfigDirs, HermesConfig, get_config_dirs};
pub use error::{ErrorKind, ProviderError, RemoteError, ValidationTarget};
pub use message::Message;
pub use notifier::{Notifier, NotifierConfiguration, NotifierSecret, ProviderType};
pub use opt_values::{DependentValues, OptValue, OptValues};
pub use output::{ColorMode, format_provider_error, print_error, print_warning};
pub use provider::Provider;

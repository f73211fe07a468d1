//! Configuration layer for the slack-chat binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`MessageDefaults`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file** - `--config`, or the platform config directory
//!    (`slack-chat/config.toml`) when that file exists
//! 3. **Built-in defaults**
//!
//! `--debug` uses OR semantics: set in either place, it is on.
//!
//! Message defaults (`[message]`) are TOML-only. Per-message CLI flags such as
//! `--no-escape` and `--as-user` are applied after them and therefore win.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command, PostArgs, ResponseTypeArg, UploadArgs};
pub use error::{ConfigError, field};
pub use self::toml::{MessageSection, SlackSection, TomlConfig, default_config_template};
pub use validated::{MessageDefaults, ValidatedConfig, write_default_config};

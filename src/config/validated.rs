//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use url::Url;

use crate::chat::{MsgOption, SLACK_API};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::{MessageSection, TomlConfig};

/// Message settings applied to every `post` before its own options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDefaults {
    pub username: Option<String>,
    pub icon_emoji: Option<String>,
    pub icon_url: Option<String>,
    pub as_user: bool,
    pub unfurl_links: Option<bool>,
    pub unfurl_media: Option<bool>,
    pub markdown: Option<bool>,
    pub escape_text: bool,
}

impl Default for MessageDefaults {
    fn default() -> Self {
        Self {
            username: None,
            icon_emoji: None,
            icon_url: None,
            as_user: false,
            unfurl_links: None,
            unfurl_media: None,
            markdown: None,
            escape_text: defaults::ESCAPE_TEXT,
        }
    }
}

impl MessageDefaults {
    fn from_section(section: &MessageSection) -> Self {
        Self {
            username: section.username.clone(),
            icon_emoji: section.icon_emoji.clone(),
            icon_url: section.icon_url.clone(),
            as_user: section.as_user.unwrap_or(false),
            unfurl_links: section.unfurl_links,
            unfurl_media: section.unfurl_media,
            markdown: section.markdown,
            escape_text: section.escape_text.unwrap_or(defaults::ESCAPE_TEXT),
        }
    }

    /// Message options expressing these defaults.
    ///
    /// Settings left at Slack's own default produce no option.
    #[must_use]
    pub fn options(&self) -> Vec<MsgOption> {
        let mut options = Vec::new();
        if let Some(username) = &self.username {
            options.push(MsgOption::username(username.as_str()));
        }
        if let Some(emoji) = &self.icon_emoji {
            options.push(MsgOption::icon_emoji(emoji.as_str()));
        }
        if let Some(url) = &self.icon_url {
            options.push(MsgOption::icon_url(url.as_str()));
        }
        if self.as_user {
            options.push(MsgOption::as_user(true));
        }
        match self.unfurl_links {
            Some(true) => options.push(MsgOption::enable_link_unfurl()),
            Some(false) => options.push(MsgOption::disable_link_unfurl()),
            None => {}
        }
        if self.unfurl_media == Some(false) {
            options.push(MsgOption::disable_media_unfurl());
        }
        if self.markdown == Some(false) {
            options.push(MsgOption::disable_markdown());
        }
        options
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// API token (required)
    pub token: String,

    /// Web API base URL
    pub api_url: Url,

    /// Dump failed responses to the log
    pub debug: bool,

    /// Verbose logging enabled
    pub verbose: bool,

    /// Defaults for posted messages
    pub message: MessageDefaults,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ api_url: {}, token: <redacted>, debug: {}, escape_text: {}, as_user: {} }}",
            self.api_url, self.debug, self.message.escape_text, self.message.as_user,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The token is missing
    /// - The API URL is invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let token = Self::resolve_token(cli, toml)?;
        let api_url = Self::resolve_api_url(cli, toml)?;

        // Flags only enable
        let debug = cli.debug || toml.is_some_and(|t| t.slack.debug);

        let message = toml
            .map(|t| MessageDefaults::from_section(&t.message))
            .unwrap_or_default();

        Ok(Self {
            token,
            api_url,
            debug,
            verbose: cli.verbose,
            message,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// Reads `cli.config` when given. Otherwise falls back to the file at
    /// [`defaults::config_path`] if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| defaults::config_path().filter(|p| p.is_file()));

        let toml = match path {
            Some(ref path) => {
                tracing::debug!("Loading config from {}", path.display());
                Some(TomlConfig::load(path)?)
            }
            None => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_token(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.token
            .as_deref()
            .or_else(|| toml.and_then(|t| t.slack.token.as_deref()))
            .filter(|token| !token.is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| {
                ConfigError::missing(field::TOKEN, "Use --token or set slack.token in config file")
            })
    }

    fn resolve_api_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .api_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.slack.api_url.as_deref()))
            .unwrap_or(SLACK_API);

        Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Writes the default configuration template to the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

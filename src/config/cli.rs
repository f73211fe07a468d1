//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// slack-chat: send, update and delete Slack messages from the shell.
#[derive(Debug, Parser)]
#[command(name = "slack-chat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Slack API token (bot or user)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Base URL of the Slack Web API
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Dump failed HTTP responses to the log
    #[arg(long, global = true)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for slack-chat
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "slack-chat.toml")]
        output: PathBuf,
    },

    /// Post a message to a channel
    Post(PostArgs),

    /// Replace the text of an existing message
    Update {
        #[arg(long)]
        channel: String,
        /// Timestamp of the message to update
        #[arg(long)]
        ts: String,
        #[arg(long)]
        text: String,
    },

    /// Delete a message
    Delete {
        #[arg(long)]
        channel: String,
        /// Timestamp of the message to delete
        #[arg(long)]
        ts: String,
    },

    /// Post a message only one user can see
    Ephemeral {
        #[arg(long)]
        channel: String,
        /// Recipient user ID
        #[arg(long)]
        user: String,
        #[arg(long)]
        text: String,
    },

    /// Reply through an interaction's response URL
    Respond {
        /// Response URL received with the interaction
        #[arg(long)]
        url: String,
        #[arg(long)]
        text: String,
        /// Who sees the reply
        #[arg(long = "response-type", value_enum)]
        response_type: Option<ResponseTypeArg>,
    },

    /// Upload a file or text snippet
    Upload(UploadArgs),
}

/// Arguments for `post`
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct PostArgs {
    #[arg(long)]
    pub channel: String,

    #[arg(long)]
    pub text: String,

    /// Reply in the thread rooted at this timestamp
    #[arg(long = "thread-ts")]
    pub thread_ts: Option<String>,

    /// Also show the thread reply in the channel
    #[arg(long)]
    pub broadcast: bool,

    /// Send the text as-is instead of escaping &, < and >
    #[arg(long = "no-escape")]
    pub no_escape: bool,

    /// Post as the authenticated user
    #[arg(long = "as-user")]
    pub as_user: bool,

    /// Attachments as a JSON array
    #[arg(long, value_name = "JSON")]
    pub attachments: Option<String>,
}

/// Arguments for `upload`
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Channels to share the file to (comma-separated or repeated)
    #[arg(long, value_delimiter = ',')]
    pub channels: Vec<String>,

    /// Path of the file to upload
    #[arg(long, conflicts_with = "content", required_unless_present = "content")]
    pub file: Option<PathBuf>,

    /// Inline text to upload as a snippet
    #[arg(long)]
    pub content: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// Message posted with the file
    #[arg(long)]
    pub comment: Option<String>,
}

/// Visibility of a response URL reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResponseTypeArg {
    /// Visible to everyone in the channel
    #[value(name = "in_channel")]
    InChannel,
    /// Visible only to the user who triggered the interaction
    #[value(name = "ephemeral")]
    Ephemeral,
}

impl ResponseTypeArg {
    /// Wire value for the `response_type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InChannel => "in_channel",
            Self::Ephemeral => "ephemeral",
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}

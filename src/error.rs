//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for every Slack operation.
///
/// Variants fall into the stages a call goes through: building the request
/// locally, moving it over the network, and interpreting the response.
/// Nothing is retried; the caller decides what to do with each failure.
#[derive(Debug, Error)]
pub enum SlackError {
    /// Reading a local source (usually an upload) failed.
    #[error("I/O error{}: {source}", path.as_ref().map(|p| format!(" on '{}'", p.display())).unwrap_or_default())]
    Io {
        /// File being read, when there is one
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A request payload could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// An endpoint or callback URL could not be parsed.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Parser diagnostic
        reason: String,
    },

    /// The call was made with an unusable combination of arguments.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(&'static str),

    /// The HTTP client failed before a response arrived.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a status other than 200.
    ///
    /// The body is not parsed: Slack serves HTML error pages on 5xx.
    #[error("Slack server error: {status}.")]
    Server {
        /// Response status
        status: http::StatusCode,
    },

    /// A 200 response carried a body that is not the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The API envelope reported `ok: false`.
    ///
    /// Displays as the bare upstream error code, e.g. `not_in_channel`.
    #[error("{0}")]
    Api(String),

    /// A response URL answered with something other than `ok`.
    ///
    /// Displays as the raw response body.
    #[error("{0}")]
    Callback(String),
}

impl SlackError {
    /// Wraps an I/O error that is not tied to a path.
    #[must_use]
    pub const fn io(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }

    /// Returns the upstream error code for [`SlackError::Api`].
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api(code) => Some(code),
            _ => None,
        }
    }
}

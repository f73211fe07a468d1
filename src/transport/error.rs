//! Error type for the HTTP client layer.

use thiserror::Error;

/// Failure raised by an [`HttpClient`](super::HttpClient) before any response
/// was received.
///
/// A request that produced a response, whatever its status, is never an
/// `HttpError`; status handling belongs to the transport.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, refused connections
    /// and bodies that could not be read to completion.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be encoded for the wire.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

//! Response body parsers.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::SlackError;

/// The success token returned by response URLs.
pub const TEXT_OK: &[u8] = b"ok";

/// Turns the body of a `200 OK` response into a value.
pub trait ResponseParser {
    /// Parsed value.
    type Output;

    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns a [`SlackError`] when the body does not match the expected shape.
    fn parse(&self, body: &[u8]) -> Result<Self::Output, SlackError>;
}

/// Decodes the body as JSON into `T`.
#[derive(Debug)]
pub struct JsonParser<T>(PhantomData<fn() -> T>);

impl<T> JsonParser<T> {
    /// Creates a parser for `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for JsonParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> ResponseParser for JsonParser<T> {
    type Output = T;

    fn parse(&self, body: &[u8]) -> Result<T, SlackError> {
        serde_json::from_slice(body).map_err(SlackError::Decode)
    }
}

/// Accepts exactly the body `ok`; anything else fails with the body as message.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextParser;

impl ResponseParser for TextParser {
    type Output = ();

    fn parse(&self, body: &[u8]) -> Result<(), SlackError> {
        if body == TEXT_OK {
            Ok(())
        } else {
            Err(SlackError::Callback(String::from_utf8_lossy(body).into_owned()))
        }
    }
}

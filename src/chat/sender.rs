//! The two ways a resolved send turns into an HTTP request.

use url::Url;

use super::{Attachment, ChatResponseFull, Msg};
use crate::SlackError;
use crate::transport::{
    HttpRequest, JsonParser, ResponseParser, TextParser, Values, form_request, json_request,
};

/// How the response to a chat request is read.
///
/// Web API methods answer with a JSON envelope; response URLs answer with
/// the bare text `ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatParser {
    Json,
    Text,
}

impl ResponseParser for ChatParser {
    type Output = ChatResponseFull;

    fn parse(&self, body: &[u8]) -> Result<ChatResponseFull, SlackError> {
        match self {
            Self::Json => JsonParser::<ChatResponseFull>::new().parse(body),
            Self::Text => TextParser
                .parse(body)
                .map(|()| ChatResponseFull::accepted()),
        }
    }
}

/// Form-encoded POST to a Web API method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSender {
    pub endpoint: Url,
    pub values: Values,
}

impl FormSender {
    #[must_use]
    pub fn build_request(&self) -> (HttpRequest, ChatParser) {
        (
            form_request(self.endpoint.clone(), &self.values),
            ChatParser::Json,
        )
    }
}

/// JSON POST to a response URL.
///
/// Only the message content travels; the token and channel stay behind
/// because the URL itself authorizes the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseUrlSender {
    pub endpoint: Url,
    pub values: Values,
    pub attachments: Option<Vec<Attachment>>,
    pub response_type: String,
}

impl ResponseUrlSender {
    /// Builds the JSON request.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::Encode`] if the message cannot be serialized.
    pub fn build_request(&self) -> Result<(HttpRequest, ChatParser), SlackError> {
        let msg = Msg {
            text: self.values.get("text").cloned().unwrap_or_default(),
            timestamp: self.values.get("ts").cloned().unwrap_or_default(),
            attachments: self.attachments.clone(),
            response_type: self.response_type.clone(),
        };
        let request = json_request(self.endpoint.clone(), &msg)?;
        Ok((request, ChatParser::Text))
    }
}

/// Sender selected by the resolved [`SendMode`](super::SendMode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    Form(FormSender),
    ResponseUrl(ResponseUrlSender),
}

impl Sender {
    /// Builds the request and names the parser for its response.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::Encode`] if a JSON body cannot be serialized.
    pub fn build_request(&self) -> Result<(HttpRequest, ChatParser), SlackError> {
        match self {
            Self::Form(sender) => Ok(sender.build_request()),
            Self::ResponseUrl(sender) => sender.build_request(),
        }
    }
}

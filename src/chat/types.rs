//! Wire types shared by the chat endpoints.

use serde::{Deserialize, Serialize};

use crate::SlackError;

/// The envelope every Slack Web API JSON response carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SlackResponse {
    /// Whether the call succeeded
    pub ok: bool,
    /// Error code when `ok` is false
    #[serde(default)]
    pub error: Option<String>,
}

impl SlackResponse {
    /// Converts a failed envelope into [`SlackError::Api`].
    ///
    /// # Errors
    ///
    /// Returns the upstream error code when `ok` is false. An envelope with
    /// no code yields `unknown_error`.
    pub fn into_result(self) -> Result<(), SlackError> {
        if self.ok {
            return Ok(());
        }
        Err(SlackError::Api(
            self.error.unwrap_or_else(|| "unknown_error".to_string()),
        ))
    }
}

/// Response to `chat.postMessage`, `chat.update`, `chat.delete` and
/// `chat.postEphemeral`.
///
/// Not every method fills every field; absent fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatResponseFull {
    /// Channel the message lives in
    #[serde(default)]
    pub channel: String,
    /// Message timestamp (Slack's message id)
    #[serde(default, rename = "ts")]
    pub timestamp: String,
    /// Message text as stored by Slack
    #[serde(default)]
    pub text: String,
    /// Envelope
    #[serde(flatten)]
    pub response: SlackResponse,
}

impl ChatResponseFull {
    /// The result a response URL implies when it answers `ok`.
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            response: SlackResponse {
                ok: true,
                error: None,
            },
            ..Self::default()
        }
    }
}

/// One field in an attachment's table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub short: bool,
}

/// A legacy secondary message attachment.
///
/// Every field is optional; unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
}

impl Attachment {
    /// Creates an attachment with only `text` set.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// JSON body posted to a response URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Msg {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(rename = "ts", skip_serializing_if = "String::is_empty")]
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub response_type: String,
}

//! The legacy all-in-one message parameter bundle.

use super::Attachment;

pub const DEFAULT_MESSAGE_USERNAME: &str = "";
pub const DEFAULT_MESSAGE_THREAD_TIMESTAMP: &str = "";
pub const DEFAULT_MESSAGE_REPLY_BROADCAST: bool = false;
pub const DEFAULT_MESSAGE_ASUSER: bool = false;
pub const DEFAULT_MESSAGE_PARSE: &str = "";
pub const DEFAULT_MESSAGE_LINK_NAMES: u8 = 0;
pub const DEFAULT_MESSAGE_UNFURL_LINKS: bool = false;
pub const DEFAULT_MESSAGE_UNFURL_MEDIA: bool = true;
pub const DEFAULT_MESSAGE_ICON_URL: &str = "";
pub const DEFAULT_MESSAGE_ICON_EMOJI: &str = "";
pub const DEFAULT_MESSAGE_MARKDOWN: bool = true;
pub const DEFAULT_MESSAGE_ESCAPE_TEXT: bool = true;

/// Every optional `chat.postMessage` setting in one value.
///
/// Only fields that differ from their default are sent, so the Slack-side
/// default applies for everything left alone. Prefer composing
/// [`MsgOption`](super::MsgOption)s for new code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // mirrors the API's flags
pub struct PostMessageParameters {
    pub username: String,
    pub as_user: bool,
    pub parse: String,
    pub thread_timestamp: String,
    pub reply_broadcast: bool,
    pub link_names: u8,
    pub attachments: Vec<Attachment>,
    pub unfurl_links: bool,
    pub unfurl_media: bool,
    pub icon_url: String,
    pub icon_emoji: String,
    pub markdown: bool,
    pub escape_text: bool,

    /// Recipient for `chat.postEphemeral`
    pub user: String,
}

impl Default for PostMessageParameters {
    fn default() -> Self {
        Self {
            username: DEFAULT_MESSAGE_USERNAME.to_string(),
            as_user: DEFAULT_MESSAGE_ASUSER,
            parse: DEFAULT_MESSAGE_PARSE.to_string(),
            thread_timestamp: DEFAULT_MESSAGE_THREAD_TIMESTAMP.to_string(),
            reply_broadcast: DEFAULT_MESSAGE_REPLY_BROADCAST,
            link_names: DEFAULT_MESSAGE_LINK_NAMES,
            attachments: Vec::new(),
            unfurl_links: DEFAULT_MESSAGE_UNFURL_LINKS,
            unfurl_media: DEFAULT_MESSAGE_UNFURL_MEDIA,
            icon_url: DEFAULT_MESSAGE_ICON_URL.to_string(),
            icon_emoji: DEFAULT_MESSAGE_ICON_EMOJI.to_string(),
            markdown: DEFAULT_MESSAGE_MARKDOWN,
            escape_text: DEFAULT_MESSAGE_ESCAPE_TEXT,
            user: DEFAULT_MESSAGE_USERNAME.to_string(),
        }
    }
}

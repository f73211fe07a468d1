//! Message options and the send configuration they fold into.
//!
//! A send starts from [`SendConfig::new`] (mode [`SendMode::Post`], parameters
//! `token` and `channel`) and passes the config through each [`MsgOption`] in
//! order. Every option consumes the config and hands back the updated value,
//! so the last option touching a key or the mode decides the outcome.

use url::Url;

use super::params::{
    DEFAULT_MESSAGE_ASUSER, DEFAULT_MESSAGE_ICON_EMOJI, DEFAULT_MESSAGE_ICON_URL,
    DEFAULT_MESSAGE_LINK_NAMES, DEFAULT_MESSAGE_MARKDOWN, DEFAULT_MESSAGE_PARSE,
    DEFAULT_MESSAGE_REPLY_BROADCAST, DEFAULT_MESSAGE_THREAD_TIMESTAMP,
    DEFAULT_MESSAGE_UNFURL_LINKS, DEFAULT_MESSAGE_UNFURL_MEDIA, DEFAULT_MESSAGE_USERNAME,
};
use super::sender::{FormSender, ResponseUrlSender, Sender};
use super::{Attachment, PostMessageParameters};
use crate::SlackError;
use crate::transport::Values;

/// Default base URL of the Slack Web API.
pub const SLACK_API: &str = "https://slack.com/api/";

/// The operation a send resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMode {
    /// `chat.postMessage`
    Post,
    /// `chat.update` of the message at `timestamp`
    Update { timestamp: String },
    /// `chat.delete` of the message at `timestamp`
    Delete { timestamp: String },
    /// `chat.postEphemeral`, visible only to `user`
    PostEphemeral { user: String },
    /// JSON delivery to an interaction's response URL
    ResponseUrl { url: Url, response_type: String },
}

impl SendMode {
    /// Slack method name for this mode.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Post => "chat.postMessage",
            Self::Update { .. } => "chat.update",
            Self::Delete { .. } => "chat.delete",
            Self::PostEphemeral { .. } => "chat.postEphemeral",
            Self::ResponseUrl { .. } => "chat.responseURL",
        }
    }

    /// Resolves the URL this mode posts to.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::InvalidUrl`] if the method cannot be joined onto
    /// `api_url`.
    pub fn endpoint(&self, api_url: &Url) -> Result<Url, SlackError> {
        if let Self::ResponseUrl { url, .. } = self {
            return Ok(url.clone());
        }
        api_url
            .join(self.method())
            .map_err(|e| SlackError::InvalidUrl {
                url: format!("{api_url}{}", self.method()),
                reason: e.to_string(),
            })
    }
}

/// Accumulated state for one send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendConfig {
    mode: SendMode,
    values: Values,
    attachments: Option<Vec<Attachment>>,
}

impl SendConfig {
    /// Starting point for every send: post mode, `token` and `channel` set.
    #[must_use]
    pub fn new(token: &str, channel: &str) -> Self {
        let mut values = Values::new();
        values.insert("token".to_string(), token.to_string());
        values.insert("channel".to_string(), channel.to_string());
        Self {
            mode: SendMode::Post,
            values,
            attachments: None,
        }
    }

    /// Folds `options`, in order, over a fresh config.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first option failure.
    pub fn from_options<I>(token: &str, channel: &str, options: I) -> Result<Self, SlackError>
    where
        I: IntoIterator<Item = MsgOption>,
    {
        options
            .into_iter()
            .try_fold(Self::new(token, channel), |config, option| option.apply(config))
    }

    /// The resolved mode.
    #[must_use]
    pub const fn mode(&self) -> &SendMode {
        &self.mode
    }

    /// Structured attachments, kept for the response URL sender.
    #[must_use]
    pub fn attachments(&self) -> Option<&[Attachment]> {
        self.attachments.as_deref()
    }

    /// Final request parameters.
    ///
    /// Adds the mode's own parameters (`ts` for update and delete, `user` for
    /// ephemeral posts) to the accumulated ones. When `as_user=true` is set and
    /// nothing said anything about `unfurl_links`, pins it to `false`: Slack
    /// flips its unfurl default for messages sent as the user.
    #[must_use]
    pub fn values(&self) -> Values {
        let mut values = self.values.clone();

        match &self.mode {
            SendMode::Update { timestamp } | SendMode::Delete { timestamp } => {
                values.insert("ts".to_string(), timestamp.clone());
            }
            SendMode::PostEphemeral { user } => {
                values.insert("user".to_string(), user.clone());
            }
            SendMode::Post | SendMode::ResponseUrl { .. } => {}
        }

        if values.get("as_user").is_some_and(|v| v == "true") && !values.contains_key("unfurl_links")
        {
            values.insert("unfurl_links".to_string(), "false".to_string());
        }

        values
    }

    /// Resolves the config into the sender for its mode.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::InvalidUrl`] if the endpoint cannot be built.
    pub fn into_sender(self, api_url: &Url) -> Result<Sender, SlackError> {
        let endpoint = self.mode.endpoint(api_url)?;
        let values = self.values();

        Ok(match self.mode {
            SendMode::ResponseUrl { response_type, .. } => Sender::ResponseUrl(ResponseUrlSender {
                endpoint,
                values,
                attachments: self.attachments,
                response_type,
            }),
            SendMode::Post
            | SendMode::Update { .. }
            | SendMode::Delete { .. }
            | SendMode::PostEphemeral { .. } => Sender::Form(FormSender { endpoint, values }),
        })
    }

    fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }
}

/// Runs [`SendConfig::from_options`] and returns the Slack method name with
/// the final parameters. Handy for inspecting what a send would do.
///
/// # Errors
///
/// Returns the first option failure.
pub fn apply_msg_options<I>(
    token: &str,
    channel: &str,
    options: I,
) -> Result<(&'static str, Values), SlackError>
where
    I: IntoIterator<Item = MsgOption>,
{
    let config = SendConfig::from_options(token, channel, options)?;
    Ok((config.mode().method(), config.values()))
}

/// Replaces `&`, `<` and `>` with their HTML entities, as Slack's message
/// formatting requires.
#[must_use]
pub fn escape_message(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One step in composing a send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MsgOption {
    Post,
    PostEphemeral { user: String },
    Update { timestamp: String },
    Delete { timestamp: String },
    ResponseUrl { url: String, response_type: String },
    AsUser(bool),
    Text { text: String, escape: bool },
    Attachments(Vec<Attachment>),
    EnableLinkUnfurl,
    DisableLinkUnfurl,
    DisableMediaUnfurl,
    DisableMarkdown,
    ThreadTs(String),
    Broadcast,
    Username(String),
    IconUrl(String),
    IconEmoji(String),
    User(String),
    PostMessageParameters(Box<PostMessageParameters>),
}

impl MsgOption {
    /// Post a new message. This is the default mode.
    #[must_use]
    pub const fn post() -> Self {
        Self::Post
    }

    /// Post an ephemeral message visible only to `user`.
    #[must_use]
    pub fn post_ephemeral(user: impl Into<String>) -> Self {
        Self::PostEphemeral { user: user.into() }
    }

    /// Update the message at `timestamp`.
    #[must_use]
    pub fn update(timestamp: impl Into<String>) -> Self {
        Self::Update {
            timestamp: timestamp.into(),
        }
    }

    /// Delete the message at `timestamp`.
    #[must_use]
    pub fn delete(timestamp: impl Into<String>) -> Self {
        Self::Delete {
            timestamp: timestamp.into(),
        }
    }

    /// Deliver through a response URL instead of the Web API.
    ///
    /// `response_type` is `in_channel` or `ephemeral`; empty leaves Slack's
    /// default.
    #[must_use]
    pub fn response_url(url: impl Into<String>, response_type: impl Into<String>) -> Self {
        Self::ResponseUrl {
            url: url.into(),
            response_type: response_type.into(),
        }
    }

    /// Send as the authenticated user. `false` leaves Slack's default.
    #[must_use]
    pub const fn as_user(as_user: bool) -> Self {
        Self::AsUser(as_user)
    }

    /// Message text, optionally run through [`escape_message`].
    #[must_use]
    pub fn text(text: impl Into<String>, escape: bool) -> Self {
        Self::Text {
            text: text.into(),
            escape,
        }
    }

    /// Legacy attachments. An empty list changes nothing.
    #[must_use]
    pub const fn attachments(attachments: Vec<Attachment>) -> Self {
        Self::Attachments(attachments)
    }

    #[must_use]
    pub const fn enable_link_unfurl() -> Self {
        Self::EnableLinkUnfurl
    }

    #[must_use]
    pub const fn disable_link_unfurl() -> Self {
        Self::DisableLinkUnfurl
    }

    #[must_use]
    pub const fn disable_media_unfurl() -> Self {
        Self::DisableMediaUnfurl
    }

    #[must_use]
    pub const fn disable_markdown() -> Self {
        Self::DisableMarkdown
    }

    /// Reply in the thread rooted at `timestamp`.
    #[must_use]
    pub fn thread_ts(timestamp: impl Into<String>) -> Self {
        Self::ThreadTs(timestamp.into())
    }

    /// Also show a thread reply in the channel.
    #[must_use]
    pub const fn broadcast() -> Self {
        Self::Broadcast
    }

    #[must_use]
    pub fn username(username: impl Into<String>) -> Self {
        Self::Username(username.into())
    }

    #[must_use]
    pub fn icon_url(url: impl Into<String>) -> Self {
        Self::IconUrl(url.into())
    }

    #[must_use]
    pub fn icon_emoji(emoji: impl Into<String>) -> Self {
        Self::IconEmoji(emoji.into())
    }

    /// Set the `user` parameter without changing the mode.
    #[must_use]
    pub fn user(user: impl Into<String>) -> Self {
        Self::User(user.into())
    }

    /// Apply a [`PostMessageParameters`] bundle.
    #[must_use]
    pub fn post_message_parameters(params: PostMessageParameters) -> Self {
        Self::PostMessageParameters(Box::new(params))
    }

    /// Applies this option to `config`.
    ///
    /// # Errors
    ///
    /// - [`SlackError::InvalidUrl`] for an unparsable response URL
    /// - [`SlackError::Encode`] if attachments cannot be serialized
    pub fn apply(self, mut config: SendConfig) -> Result<SendConfig, SlackError> {
        match self {
            Self::Post => config.mode = SendMode::Post,
            Self::PostEphemeral { user } => config.mode = SendMode::PostEphemeral { user },
            Self::Update { timestamp } => config.mode = SendMode::Update { timestamp },
            Self::Delete { timestamp } => config.mode = SendMode::Delete { timestamp },
            Self::ResponseUrl { url, response_type } => {
                let parsed = Url::parse(&url).map_err(|e| SlackError::InvalidUrl {
                    url,
                    reason: e.to_string(),
                })?;
                config.mode = SendMode::ResponseUrl {
                    url: parsed,
                    response_type,
                };
            }
            Self::AsUser(as_user) => {
                if as_user != DEFAULT_MESSAGE_ASUSER {
                    config.set("as_user", "true");
                }
            }
            Self::Text { text, escape } => {
                let text = if escape { escape_message(&text) } else { text };
                config.set("text", text);
            }
            Self::Attachments(attachments) => {
                if !attachments.is_empty() {
                    // Form senders read the JSON parameter, the response URL
                    // sender reads the structured list.
                    let json = serde_json::to_string(&attachments).map_err(SlackError::Encode)?;
                    config.set("attachments", json);
                    config.attachments = Some(attachments);
                }
            }
            Self::EnableLinkUnfurl => config.set("unfurl_links", "true"),
            Self::DisableLinkUnfurl => config.set("unfurl_links", "false"),
            Self::DisableMediaUnfurl => config.set("unfurl_media", "false"),
            Self::DisableMarkdown => config.set("mrkdwn", "false"),
            Self::ThreadTs(timestamp) => config.set("thread_ts", timestamp),
            Self::Broadcast => config.set("reply_broadcast", "true"),
            Self::Username(username) => config.set("username", username),
            Self::IconUrl(url) => config.set("icon_url", url),
            Self::IconEmoji(emoji) => config.set("icon_emoji", emoji),
            Self::User(user) => config.set("user", user),
            Self::PostMessageParameters(params) => apply_parameters(&mut config, &params),
        }
        Ok(config)
    }
}

fn apply_parameters(config: &mut SendConfig, params: &PostMessageParameters) {
    if params.username != DEFAULT_MESSAGE_USERNAME {
        config.set("username", params.username.as_str());
    }
    if params.user != DEFAULT_MESSAGE_USERNAME {
        config.set("user", params.user.as_str());
    }
    if params.as_user != DEFAULT_MESSAGE_ASUSER {
        config.set("as_user", "true");
    }
    if params.parse != DEFAULT_MESSAGE_PARSE {
        config.set("parse", params.parse.as_str());
    }
    if params.link_names != DEFAULT_MESSAGE_LINK_NAMES {
        config.set("link_names", "1");
    }
    if params.unfurl_links != DEFAULT_MESSAGE_UNFURL_LINKS {
        config.set("unfurl_links", "true");
    }
    // Slack turns link unfurling on for as_user messages unless told otherwise.
    if params.as_user != DEFAULT_MESSAGE_ASUSER && params.unfurl_links == DEFAULT_MESSAGE_UNFURL_LINKS
    {
        config.set("unfurl_links", "false");
    }
    if params.unfurl_media != DEFAULT_MESSAGE_UNFURL_MEDIA {
        config.set("unfurl_media", "false");
    }
    if params.icon_url != DEFAULT_MESSAGE_ICON_URL {
        config.set("icon_url", params.icon_url.as_str());
    }
    if params.icon_emoji != DEFAULT_MESSAGE_ICON_EMOJI {
        config.set("icon_emoji", params.icon_emoji.as_str());
    }
    if params.markdown != DEFAULT_MESSAGE_MARKDOWN {
        config.set("mrkdwn", "false");
    }
    if params.thread_timestamp != DEFAULT_MESSAGE_THREAD_TIMESTAMP {
        config.set("thread_ts", params.thread_timestamp.as_str());
    }
    if params.reply_broadcast != DEFAULT_MESSAGE_REPLY_BROADCAST {
        config.set("reply_broadcast", "true");
    }
}

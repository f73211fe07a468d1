//! slack-chat: a Slack Web API client for chat messages and file uploads.
//!
//! Messages are composed from an ordered list of [`MsgOption`]s that resolve
//! to one operation (post, update, delete, ephemeral post, or response URL
//! delivery). The [`Client`] builds the matching request, sends it through an
//! injectable [`transport::HttpClient`], and checks Slack's response envelope.

pub mod chat;
mod client;
pub mod config;
mod error;
pub mod files;
pub mod transport;

#[cfg(test)]
mod test_fixtures;

pub use chat::{Attachment, MsgOption, PostMessageParameters, SendMode};
pub use client::{Client, SentMessage};
pub use error::SlackError;
pub use files::{File, FileUploadParameters};

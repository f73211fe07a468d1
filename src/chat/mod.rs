//! Chat message composition.
//!
//! This module provides:
//! - Composable message options ([`MsgOption`]) folded into a [`SendConfig`]
//! - The resolved operation ([`SendMode`])
//! - Request construction per mode ([`Sender`])
//! - The legacy parameter bundle ([`PostMessageParameters`])
//! - Wire types ([`Attachment`], [`Msg`], [`ChatResponseFull`], [`SlackResponse`])

mod options;
pub mod params;
mod sender;
mod types;


pub use options::{MsgOption, SLACK_API, SendConfig, SendMode, apply_msg_options, escape_message};
pub use params::PostMessageParameters;
pub use sender::{ChatParser, FormSender, ResponseUrlSender, Sender};
pub use types::{Attachment, AttachmentField, ChatResponseFull, Msg, SlackResponse};

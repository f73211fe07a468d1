//! Command execution.
//!
//! Turns a parsed [`Command`] into client calls and formats what Slack
//! returned for the terminal.

use thiserror::Error;

use slack_chat::config::{Command, MessageDefaults, PostArgs, UploadArgs, ValidatedConfig};
use slack_chat::transport::{HttpClient, ReqwestClient};
use slack_chat::{Attachment, Client, FileUploadParameters, MsgOption, SlackError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// A Slack call failed.
    #[error(transparent)]
    Slack(#[from] SlackError),

    /// `--attachments` is not a JSON array of attachments.
    #[error("Invalid --attachments JSON: {0}")]
    InvalidAttachments(#[source] serde_json::Error),
}

/// Runs `command` against the real Slack API.
///
/// # Errors
///
/// Returns an error if the command's Slack call fails.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, command: Command) -> Result<(), RunError> {
    let client = Client::new(ReqwestClient::new(), config.token.as_str())
        .with_api_url(config.api_url.clone())
        .with_debug(config.debug);

    if let Some(line) = execute_with(&client, command, &config.message).await? {
        println!("{line}");
    }
    Ok(())
}

/// Runs `command` through `client` and returns the line to print, if any.
///
/// # Errors
///
/// Returns an error if the arguments cannot be turned into a request or the
/// Slack call fails.
pub async fn execute_with<H: HttpClient>(
    client: &Client<H>,
    command: Command,
    defaults: &MessageDefaults,
) -> Result<Option<String>, RunError> {
    match command {
        // Handled before any client exists
        Command::Init { .. } => Ok(None),
        Command::Post(args) => {
            let options = post_options(&args, defaults)?;
            let sent = client.send_message(&args.channel, options).await?;
            tracing::info!(channel = %sent.channel, ts = %sent.timestamp, "Message posted");
            Ok(Some(format!("{} {}", sent.channel, sent.timestamp)))
        }
        Command::Update { channel, ts, text } => {
            let sent = client.update_message(&channel, &ts, &text).await?;
            tracing::info!(channel = %sent.channel, ts = %sent.timestamp, "Message updated");
            Ok(Some(format!("{} {}", sent.channel, sent.timestamp)))
        }
        Command::Delete { channel, ts } => {
            let (channel, ts) = client.delete_message(&channel, &ts).await?;
            tracing::info!(%channel, %ts, "Message deleted");
            Ok(Some(format!("{channel} {ts}")))
        }
        Command::Ephemeral {
            channel,
            user,
            text,
        } => {
            let mut options = defaults.options();
            options.push(MsgOption::text(text, defaults.escape_text));
            let ts = client.post_ephemeral(&channel, &user, options).await?;
            tracing::info!(%channel, %user, %ts, "Ephemeral message posted");
            Ok(Some(ts))
        }
        Command::Respond {
            url,
            text,
            response_type,
        } => {
            let options = [
                MsgOption::response_url(url, response_type.map_or("", |t| t.as_str())),
                MsgOption::text(text, defaults.escape_text),
            ];
            client.send_message("", options).await?;
            tracing::info!("Response delivered");
            Ok(None)
        }
        Command::Upload(args) => {
            let file = client.upload_file(&upload_parameters(args)).await?;
            tracing::info!(id = %file.id, name = %file.name, "File uploaded");
            Ok(Some(format!("{} {}", file.id, file.name)))
        }
    }
}

/// Options for `post`: configured defaults first, then the command's flags.
fn post_options(args: &PostArgs, defaults: &MessageDefaults) -> Result<Vec<MsgOption>, RunError> {
    let mut options = defaults.options();

    let escape = defaults.escape_text && !args.no_escape;
    options.push(MsgOption::text(args.text.as_str(), escape));

    if let Some(ts) = &args.thread_ts {
        options.push(MsgOption::thread_ts(ts.as_str()));
        if args.broadcast {
            options.push(MsgOption::broadcast());
        }
    }
    if args.as_user {
        options.push(MsgOption::as_user(true));
    }
    if let Some(json) = &args.attachments {
        let attachments: Vec<Attachment> =
            serde_json::from_str(json).map_err(RunError::InvalidAttachments)?;
        options.push(MsgOption::attachments(attachments));
    }

    Ok(options)
}

fn upload_parameters(args: UploadArgs) -> FileUploadParameters {
    FileUploadParameters {
        file: args.file,
        content: args.content,
        title: args.title.unwrap_or_default(),
        initial_comment: args.comment.unwrap_or_default(),
        channels: args.channels,
        ..FileUploadParameters::default()
    }
}

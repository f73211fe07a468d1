//! Request execution.

use super::{HttpClient, HttpRequest, ResponseLogger, ResponseParser};
use crate::SlackError;

/// Executes `request` and parses the body of a `200 OK` response.
///
/// Any other status fails with [`SlackError::Server`] without looking at the
/// body. When `logger` is set it receives the full response first.
///
/// # Errors
///
/// - [`SlackError::Http`] if the client fails
/// - [`SlackError::Server`] on a non-200 status
/// - whatever `parser` returns
pub async fn post<H, P>(
    client: &H,
    request: HttpRequest,
    parser: &P,
    logger: Option<&dyn ResponseLogger>,
) -> Result<P::Output, SlackError>
where
    H: HttpClient + ?Sized,
    P: ResponseParser + ?Sized,
{
    tracing::debug!(url = %request.url, "Sending request");

    let response = client.request(request).await?;

    if response.status != http::StatusCode::OK {
        if let Some(logger) = logger {
            logger.log_response(&response.dump());
        }
        tracing::warn!(status = %response.status, "Slack returned non-200 status");
        return Err(SlackError::Server {
            status: response.status,
        });
    }

    parser.parse(&response.body)
}

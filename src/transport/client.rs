//! Production HTTP client implementation using reqwest.

use reqwest::multipart::{Form, Part};

use super::{FilePart, HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` implementing [`HttpClient`].
/// Cloning is cheap and shares the connection pool, so one instance can serve
/// many concurrent sends.
///
/// # Example
///
/// ```no_run
/// use slack_chat::transport::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://slack.com/api/api.test")?;
/// let response = client.request(HttpRequest::post(url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, proxies, TLS).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self
            .inner
            .request(req.method, req.url.as_str())
            .headers(req.headers);

        if let Some(part) = req.multipart {
            builder = builder.multipart(multipart_form(part)?);
        } else if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        tracing::trace!(%status, bytes = body.len(), "Received response");

        Ok(HttpResponse::new(status, headers, body))
    }
}

/// Encodes a [`FilePart`] as a reqwest form.
///
/// The file name is percent-encoded (RFC 7578 section 4.2) before reqwest
/// quotes it, so control characters and quotes cannot end the
/// `Content-Disposition` header early. reqwest encodes the field name itself.
fn multipart_form(part: FilePart) -> Result<Form, HttpError> {
    let FilePart {
        field,
        filename,
        data,
    } = part;

    let part = Part::bytes(data)
        .file_name(urlencoding::encode(&filename).into_owned())
        .mime_str(FilePart::CONTENT_TYPE)
        .map_err(|e| HttpError::InvalidBody(e.to_string()))?;

    Ok(Form::new().part(field, part))
}

//! Request builders for the three body encodings the Slack Web API accepts.

use std::collections::BTreeMap;
use std::io::Read;

use http::HeaderValue;
use serde::Serialize;
use url::Url;

use super::{FilePart, HttpRequest};
use crate::SlackError;

/// Ordered request parameters.
///
/// Keys are unique; setting a key again replaces its value.
pub type Values = BTreeMap<String, String>;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Builds a form-encoded POST request.
#[must_use]
pub fn form_request(endpoint: Url, values: &Values) -> HttpRequest {
    HttpRequest::post(endpoint)
        .with_body(encode_values(values).into_bytes())
        .with_content_type(HeaderValue::from_static(FORM_CONTENT_TYPE))
}

/// Builds a POST request whose body is `body` serialized as JSON.
///
/// # Errors
///
/// Returns [`SlackError::Encode`] if `body` cannot be serialized.
pub fn json_request<T: Serialize + ?Sized>(endpoint: Url, body: &T) -> Result<HttpRequest, SlackError> {
    let bytes = serde_json::to_vec(body).map_err(SlackError::Encode)?;
    Ok(HttpRequest::post(endpoint)
        .with_body(bytes)
        .with_content_type(HeaderValue::from_static(JSON_CONTENT_TYPE)))
}

/// Builds a `multipart/form-data` upload request.
///
/// The whole of `reader` becomes a single file part named `fieldname`. The
/// part travels structured in [`HttpRequest::multipart`]; the client picks
/// the boundary and writes the part headers. `values` are sent as the URL
/// query string, replacing any query already on `endpoint`.
///
/// # Errors
///
/// - [`SlackError::InvalidParameters`] if `fieldname` is empty
/// - [`SlackError::Io`] if `reader` fails
pub fn multipart_request<R: Read>(
    mut endpoint: Url,
    fieldname: &str,
    filename: &str,
    mut reader: R,
    values: &Values,
) -> Result<HttpRequest, SlackError> {
    if fieldname.is_empty() {
        return Err(SlackError::InvalidParameters("multipart field name is empty"));
    }

    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(SlackError::io)?;

    endpoint.set_query(None);
    if !values.is_empty() {
        endpoint.set_query(Some(&encode_values(values)));
    }

    Ok(HttpRequest::post(endpoint).with_multipart(FilePart {
        field: fieldname.to_string(),
        filename: filename.to_string(),
        data,
    }))
}

fn encode_values(values: &Values) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(values)
        .finish()
}

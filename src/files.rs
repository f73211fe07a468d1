//! File uploads through `files.upload`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::SlackError;
use crate::chat::SlackResponse;
use crate::transport::{HttpRequest, Values, form_request, multipart_request};

/// Multipart field name Slack expects the file under.
const FILE_FIELD: &str = "file";

/// Arguments for [`Client::upload_file`](crate::Client::upload_file).
///
/// One source is expected among `content`, `data` and `file`, checked in
/// that order. With `content` the text is sent inline as a form field; `data`
/// and `file` are uploaded as a multipart file part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileUploadParameters {
    pub file: Option<PathBuf>,
    pub content: Option<String>,
    /// In-memory file contents
    pub data: Option<Vec<u8>>,
    pub filetype: String,
    /// Name shown in Slack; defaults to the base name of `file`
    pub filename: String,
    pub title: String,
    pub initial_comment: String,
    pub channels: Vec<String>,
    pub thread_timestamp: String,
}

impl FileUploadParameters {
    /// Parameters sent alongside the file (as query string for multipart).
    fn values(&self, token: &str) -> Values {
        let mut values = Values::new();
        values.insert("token".to_string(), token.to_string());
        let optional = [
            ("filetype", self.filetype.as_str()),
            ("filename", self.filename.as_str()),
            ("title", self.title.as_str()),
            ("initial_comment", self.initial_comment.as_str()),
            ("thread_ts", self.thread_timestamp.as_str()),
        ];
        for (key, value) in optional {
            if !value.is_empty() {
                values.insert(key.to_string(), value.to_string());
            }
        }
        if !self.channels.is_empty() {
            values.insert("channels".to_string(), self.channels.join(","));
        }
        values
    }
}

/// An uploaded file as Slack describes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct File {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub filetype: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub url_private: String,
}

/// Response to `files.upload`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FileResponseFull {
    #[serde(default)]
    pub file: File,
    #[serde(flatten)]
    pub response: SlackResponse,
}

/// Builds the upload request.
///
/// Any file handle opened here is closed before this returns.
pub(crate) fn upload_request(
    endpoint: Url,
    token: &str,
    params: &FileUploadParameters,
) -> Result<HttpRequest, SlackError> {
    let mut values = params.values(token);

    if let Some(content) = &params.content {
        values.insert("content".to_string(), content.clone());
        return Ok(form_request(endpoint, &values));
    }

    if let Some(data) = &params.data {
        return multipart_request(endpoint, FILE_FIELD, &params.filename, data.as_slice(), &values);
    }

    let Some(path) = params.file.as_deref() else {
        return Err(SlackError::InvalidParameters(
            "one of content, data or a file path is required",
        ));
    };

    let file = std::fs::File::open(path).map_err(|source| SlackError::Io {
        path: Some(path.to_path_buf()),
        source,
    })?;
    let filename = if params.filename.is_empty() {
        base_name(path)
    } else {
        params.filename.clone()
    };

    multipart_request(endpoint, FILE_FIELD, &filename, file, &values).map_err(|e| match e {
        SlackError::Io { path: None, source } => SlackError::Io {
            path: Some(path.to_path_buf()),
            source,
        },
        other => other,
    })
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

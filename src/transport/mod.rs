//! Transport layer: HTTP value types, request builders, response parsers and
//! the single `post` step that ties them together.
//!
//! This module provides:
//! - Building HTTP requests ([`HttpRequest`], [`form_request`], [`json_request`],
//!   [`multipart_request`])
//! - Handling HTTP responses ([`HttpResponse`], [`JsonParser`], [`TextParser`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Debug dumps of failed responses ([`ResponseLogger`], [`TracingLogger`])

mod client;
mod error;
mod http;
mod logger;
mod post;
mod request;
mod response;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod request_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use self::http::{FilePart, HttpClient, HttpRequest, HttpResponse};
pub use logger::{ResponseLogger, TracingLogger};
pub use post::post;
pub use request::{Values, form_request, json_request, multipart_request};
pub use response::{JsonParser, ResponseParser, TEXT_OK, TextParser};

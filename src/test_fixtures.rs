//! Shared test fixtures: a scripted HTTP client and a capturing logger.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse, ResponseLogger};

/// Mock HTTP client that replays a scripted sequence of responses and
/// records every request it receives.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// A client that answers once with `200 OK` and the given body.
    pub fn ok(body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::ok(body))])
    }

    /// A client that answers once with the given status and body.
    pub fn status(status: http::StatusCode, body: &str) -> Self {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("text/html"),
        );
        Self::new(vec![Ok(HttpResponse::new(
            status,
            headers,
            body.as_bytes().to_vec(),
        ))])
    }

    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request this client received.
    pub fn last_request(&self) -> HttpRequest {
        let requests = self.captured_requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockClient ran out of scripted responses")
    }
}

/// Logger that keeps every dump it receives.
#[derive(Debug, Default)]
pub struct CapturingLogger {
    dumps: Mutex<Vec<String>>,
}

impl CapturingLogger {
    pub fn dumps(&self) -> Vec<String> {
        self.dumps.lock().unwrap().clone()
    }
}

impl ResponseLogger for CapturingLogger {
    fn log_response(&self, dump: &str) {
        self.dumps.lock().unwrap().push(dump.to_string());
    }
}

/// Decodes a form-encoded request body into pairs.
pub fn form_pairs(req: &HttpRequest) -> Vec<(String, String)> {
    let body = req.body.as_deref().unwrap_or_default();
    url::form_urlencoded::parse(body).into_owned().collect()
}

/// Looks up one key in a form-encoded request body.
pub fn form_value(req: &HttpRequest, key: &str) -> Option<String> {
    form_pairs(req)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Decodes a JSON request body.
pub fn json_body(req: &HttpRequest) -> serde_json::Value {
    serde_json::from_slice(req.body.as_deref().unwrap_or_default()).unwrap()
}

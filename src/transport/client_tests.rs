//! Tests for `ReqwestClient`.
//!
//! Construction and error mapping, plus the wire encoding of bodies against a
//! loopback listener. Slack round-trips go through `MockClient` elsewhere.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::*;
use crate::transport::FilePart;

/// Accepts one connection on a loopback port, answers `200 ok`, and returns
/// the raw request bytes it read.
async fn capture_one_request(path: &str) -> (url::Url, tokio::task::JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        while !request_complete(&raw) {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\nok")
            .await
            .unwrap();
        raw
    });

    let url = url::Url::parse(&format!("http://{addr}{path}")).unwrap();
    (url, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let Some(split) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&raw[..split]).to_ascii_lowercase();
    let length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok());

    match length {
        Some(length) => raw.len() >= split + 4 + length,
        None => raw.ends_with(b"0\r\n\r\n"),
    }
}

fn loopback_client() -> ReqwestClient {
    ReqwestClient::from_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

mod reqwest_client {
    use super::*;

    #[test]
    fn default_creates_same_as_new() {
        let client1 = ReqwestClient::new();
        let client2 = ReqwestClient::default();

        assert!(format!("{client1:?}").contains("ReqwestClient"));
        assert!(format!("{client2:?}").contains("ReqwestClient"));
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_unroutable_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/api/chat.postMessage").unwrap();

        let result = client.request(HttpRequest::post(url)).await;

        // Behind an intercepting proxy the request may still produce a response.
        match result {
            Err(HttpError::Connection(_) | HttpError::Timeout) => {}
            Err(HttpError::InvalidUrl(msg)) => panic!("unexpected InvalidUrl: {msg}"),
            Err(HttpError::InvalidBody(msg)) => panic!("unexpected InvalidBody: {msg}"),
            Ok(response) => assert!(!response.status.is_success()),
        }
    }
}

mod wire_encoding {
    use super::*;

    #[tokio::test]
    async fn form_body_is_sent_unchanged() {
        let (url, server) = capture_one_request("/api/chat.postMessage").await;
        let request = HttpRequest::post(url)
            .with_body(b"channel=C1&text=hi".to_vec())
            .with_content_type(::http::HeaderValue::from_static(
                "application/x-www-form-urlencoded",
            ));

        let response = loopback_client().request(request).await.unwrap();

        assert_eq!(response.status, ::http::StatusCode::OK);
        assert_eq!(response.body, b"ok");
        let raw = String::from_utf8(server.await.unwrap()).unwrap();
        assert!(raw.starts_with("POST /api/chat.postMessage HTTP/1.1\r\n"));
        assert!(raw.ends_with("\r\n\r\nchannel=C1&text=hi"));
    }

    #[tokio::test]
    async fn file_part_is_encoded_as_multipart() {
        let (url, server) = capture_one_request("/api/files.upload?channels=C1").await;
        let request = HttpRequest::post(url).with_multipart(FilePart {
            field: "file".to_string(),
            filename: "report.csv".to_string(),
            data: b"a,b\n1,2".to_vec(),
        });

        loopback_client().request(request).await.unwrap();

        let raw = String::from_utf8(server.await.unwrap()).unwrap();
        assert!(raw.starts_with("POST /api/files.upload?channels=C1 HTTP/1.1\r\n"));
        assert!(
            raw.to_ascii_lowercase()
                .contains("content-type: multipart/form-data; boundary=")
        );
        assert!(raw.contains(r#"Content-Disposition: form-data; name="file"; filename="report.csv""#));
        assert!(raw.contains("Content-Type: application/octet-stream\r\n\r\na,b\n1,2\r\n"));
    }

    #[tokio::test]
    async fn filename_cannot_inject_part_headers() {
        let (url, server) = capture_one_request("/api/files.upload").await;
        let request = HttpRequest::post(url).with_multipart(FilePart {
            field: "file".to_string(),
            filename: "a\".txt\r\nContent-Type: text/html".to_string(),
            data: b"x".to_vec(),
        });

        loopback_client().request(request).await.unwrap();

        let raw = String::from_utf8(server.await.unwrap()).unwrap();
        assert_eq!(raw.matches("Content-Disposition").count(), 1);
        assert!(!raw.contains("\r\nContent-Type: text/html"));
        assert!(raw.contains(r#"filename="a%22.txt%0D%0AContent-Type%3A%20text%2Fhtml""#));
        assert!(raw.contains("Content-Type: application/octet-stream"));
    }
}

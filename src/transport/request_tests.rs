//! Tests for the form, JSON and multipart request builders.

use super::{Values, form_request, json_request, multipart_request};
use crate::SlackError;

fn endpoint() -> url::Url {
    url::Url::parse("https://slack.com/api/files.upload").unwrap()
}

fn values(pairs: &[(&str, &str)]) -> Values {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

mod form {
    use super::*;

    #[test]
    fn encodes_values_in_key_order() {
        let req = form_request(
            endpoint(),
            &values(&[("text", "a b&c"), ("channel", "C1")]),
        );

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.content_type(), Some("application/x-www-form-urlencoded"));
        assert_eq!(req.body.as_deref(), Some(&b"channel=C1&text=a+b%26c"[..]));
    }

    #[test]
    fn empty_values_produce_empty_body() {
        let req = form_request(endpoint(), &Values::new());

        assert_eq!(req.body.as_deref(), Some(&b""[..]));
    }
}

mod json {
    use super::*;

    #[derive(serde::Serialize)]
    struct Payload {
        text: &'static str,
    }

    #[test]
    fn serializes_body_with_json_content_type() {
        let req = json_request(endpoint(), &Payload { text: "hi" }).unwrap();

        assert_eq!(req.content_type(), Some("application/json; charset=utf-8"));
        assert_eq!(req.body.as_deref(), Some(&br#"{"text":"hi"}"#[..]));
    }

    #[test]
    fn serialization_failure_is_encode_error() {
        // Maps with non-string keys cannot be encoded as JSON objects.
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1_u8], 1);

        let err = json_request(endpoint(), &map).unwrap_err();

        assert!(matches!(err, SlackError::Encode(_)));
    }
}

mod multipart {
    use super::*;

    #[test]
    fn file_part_carries_source_bytes() {
        let data: Vec<u8> = (0..=255).collect();

        let req = multipart_request(endpoint(), "file", "blob.bin", &data[..], &Values::new())
            .unwrap();

        let part = req.multipart.expect("request has a file part");
        assert_eq!(part.field, "file");
        assert_eq!(part.filename, "blob.bin");
        assert_eq!(part.data, data);
        assert!(req.body.is_none());
    }

    #[test]
    fn content_type_is_left_to_the_client() {
        let req = multipart_request(endpoint(), "file", "a.txt", &b"x"[..], &Values::new())
            .unwrap();

        assert_eq!(req.content_type(), None);
    }

    #[test]
    fn values_become_query_parameters() {
        let mut url = endpoint();
        url.set_query(Some("stale=1"));

        let req = multipart_request(
            url,
            "file",
            "a.txt",
            &b"hello"[..],
            &values(&[("channels", "C1,C2"), ("title", "Report")]),
        )
        .unwrap();

        assert_eq!(req.url.query(), Some("channels=C1%2CC2&title=Report"));
    }

    #[test]
    fn empty_values_leave_no_query() {
        let req = multipart_request(endpoint(), "file", "a.txt", &b""[..], &Values::new())
            .unwrap();

        assert_eq!(req.url.query(), None);
    }

    #[test]
    fn filename_is_kept_verbatim_for_the_encoder() {
        let name = "a\".txt\r\nContent-Type: text/html";

        let req = multipart_request(endpoint(), "file", name, &b"x"[..], &Values::new()).unwrap();

        assert_eq!(req.multipart.unwrap().filename, name);
    }

    #[test]
    fn empty_field_name_is_rejected() {
        let err = multipart_request(endpoint(), "", "a.txt", &b"x"[..], &Values::new())
            .unwrap_err();

        assert!(matches!(err, SlackError::InvalidParameters(_)));
    }

    #[test]
    fn read_failure_is_io_error() {
        struct Broken;

        impl std::io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk gone"))
            }
        }

        let err = multipart_request(endpoint(), "file", "a.txt", Broken, &Values::new())
            .unwrap_err();

        assert!(matches!(err, SlackError::Io { path: None, .. }));
        assert!(err.to_string().contains("disk gone"));
    }
}

//! Raw response types for the Qiscus SDK.
//!
//! This module provides the [`ApiResponse`] envelope that captures the raw
//! HTTP response alongside the request that produced it, for diagnostic
//! access when a call fails after a response was received.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::clients::request::HttpMethod;

/// A record of the request that was sent over the wire.
///
/// Captured into the [`ApiResponse`] envelope so that callers inspecting a
/// failure can see exactly what was sent: the method, the final URL with all
/// query parameters merged, and the buffered body bytes.
#[derive(Clone, Debug)]
pub struct RequestRecord {
    /// The HTTP method of the request.
    pub method: HttpMethod,
    /// The final request URL, query string included.
    pub url: String,
    /// The buffered request body, if one was sent.
    pub body: Option<Vec<u8>>,
}

/// A raw HTTP response from a Qiscus API endpoint.
///
/// Created only after the response body has been fully read; read-only
/// afterward. Available on [`crate::clients::QiscusError::Decode`] and
/// [`crate::clients::QiscusError::Api`] failures so callers always have the
/// verbatim bytes for debugging even when typed decoding fails.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The status line, e.g. `"200 OK"`.
    pub status: String,
    /// The numeric status code, e.g. `200`.
    pub status_code: u16,
    /// The protocol the response was received over, e.g. `"HTTP/1.1"`.
    pub proto: String,
    /// Response headers; names lowercased, values in received order.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body bytes.
    pub raw_body: Vec<u8>,
    /// The request that was sent to obtain this response.
    pub request: RequestRecord,
}

impl ApiResponse {
    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status_code >= 200 && self.status_code <= 299
    }

    /// Returns the raw body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw_body)
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched case-insensitively (they are stored
    /// lowercased).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response(code: u16) -> ApiResponse {
        ApiResponse {
            status: format!("{code} status"),
            status_code: code,
            proto: "HTTP/1.1".to_string(),
            headers: HashMap::new(),
            raw_body: br#"{"status":200}"#.to_vec(),
            request: RequestRecord {
                method: HttpMethod::Get,
                url: "https://api.qiscus.com/api/v2.1/rest/user_profile".to_string(),
                body: None,
            },
        }
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in [200, 201, 204, 299] {
            assert!(sample_response(code).is_ok());
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 429, 500] {
            assert!(!sample_response(code).is_ok());
        }
    }

    #[test]
    fn test_body_text_is_verbatim() {
        let response = sample_response(200);
        assert_eq!(response.body_text(), r#"{"status":200}"#);
    }

    #[test]
    fn test_body_text_tolerates_invalid_utf8() {
        let mut response = sample_response(200);
        response.raw_body = vec![0xff, 0xfe, b'o', b'k'];
        assert!(response.body_text().contains("ok"));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut response = sample_response(200);
        response.headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }
}

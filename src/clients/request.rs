//! Request construction and execution for the Qiscus SDK.
//!
//! This module provides the [`ApiRequest`] type, its builder, and the shared
//! pipeline that every endpoint method delegates to. One call performs
//! exactly one HTTP round trip: the URL is parsed, accumulated query
//! parameters are merged (repeated names produce repeated pairs), the default
//! JSON content type and library identification headers are applied, the
//! request executes on the configured shared client, and the response body is
//! fully read before any decoding happens.
//!
//! # Example
//!
//! ```rust,ignore
//! use qiscus_api::{ApiRequest, HttpMethod, QiscusConfig};
//!
//! let response = ApiRequest::builder(HttpMethod::Get, "https://api.qiscus.com/api/v2.1/rest/user_profile")
//!     .header("QISCUS_SDK_APP_ID", "my-app")
//!     .param("user_id", "guest@qiscus.com")
//!     .build()
//!     .send(QiscusConfig::shared())
//!     .await?;
//! ```

use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::clients::errors::{BuildError, QiscusError};
use crate::clients::response::{ApiResponse, RequestRecord};
use crate::config::QiscusConfig;

/// SDK version from Cargo.toml, sent in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP methods supported by the Qiscus APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// An outbound request to a Qiscus API endpoint.
///
/// Built once per call via [`ApiRequest::builder`] and immutable once
/// execution begins. Headers and query parameters are ordered multi-value
/// lists: registering the same name twice sends it twice, and caller headers
/// never replace the defaults the pipeline applies.
///
/// The body is buffered as bytes at build time so the same copy can feed
/// both the network send and the outbound log.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute request URL, before query parameters are merged.
    pub url: String,
    /// Header (name, value) pairs, appended in registration order.
    pub headers: Vec<(String, String)>,
    /// Query (name, value) pairs, appended in registration order.
    pub params: Vec<(String, String)>,
    /// The buffered request body, if any.
    pub body: Option<Vec<u8>>,
}

// Verify ApiRequest is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiRequest>();
};

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, url)
    }

    /// Executes the request and returns the raw response.
    ///
    /// No JSON decoding is performed; use [`send_json`](Self::send_json) when
    /// a typed payload is expected.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError::Build`] if the request cannot be constructed,
    /// [`QiscusError::Transport`] if no response was received,
    /// [`QiscusError::Read`] if the response body cannot be read, and
    /// [`QiscusError::Api`] if the status code is 400 or above.
    pub async fn send(self, config: &QiscusConfig) -> Result<ApiResponse, QiscusError> {
        let response = self.dispatch(config).await?;
        check_status(response)
    }

    /// Executes the request and decodes the response body into `T`.
    ///
    /// Decoding happens before the status check, so an error response whose
    /// body does not match `T` surfaces as [`QiscusError::Decode`] rather
    /// than [`QiscusError::Api`]; both carry the raw response envelope.
    ///
    /// # Errors
    ///
    /// All of [`send`](Self::send)'s errors, plus [`QiscusError::Decode`]
    /// when the body is not valid JSON for `T`.
    pub async fn send_json<T: DeserializeOwned>(
        self,
        config: &QiscusConfig,
    ) -> Result<T, QiscusError> {
        let response = self.dispatch(config).await?;

        let decoded = match serde_json::from_slice(&response.raw_body) {
            Ok(value) => value,
            Err(source) => {
                return Err(QiscusError::Decode {
                    status_code: response.status_code,
                    response,
                    source,
                })
            }
        };

        check_status(response)?;
        Ok(decoded)
    }

    /// Performs the round trip: build, execute, read, log. Status
    /// classification and decoding are left to the callers above.
    async fn dispatch(self, config: &QiscusConfig) -> Result<ApiResponse, QiscusError> {
        let mut url =
            Url::parse(&self.url).map_err(|source| QiscusError::build(BuildError::Url(source)))?;

        // Repeated names become repeated key=value pairs, never overwritten.
        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.params {
                pairs.append_pair(name, value);
            }
        }

        let mut headers = HeaderMap::new();
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Qiscus API Library v{SDK_VERSION} | Rust {rust_version}");
        headers.append(
            header::USER_AGENT,
            HeaderValue::from_str(&user_agent).map_err(|_| {
                QiscusError::build(BuildError::HeaderValue {
                    name: "user-agent".to_string(),
                })
            })?,
        );

        // Caller headers are appended after the defaults; duplicates are
        // allowed and nothing is replaced.
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                QiscusError::build(BuildError::HeaderName { name: name.clone() })
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                QiscusError::build(BuildError::HeaderValue { name: name.clone() })
            })?;
            headers.append(header_name, header_value);
        }

        let mut request = config
            .http_client()
            .request(self.method.into(), url.clone())
            .headers(headers);
        if let Some(body) = &self.body {
            request = request.body(body.clone());
        }

        let start = Instant::now();
        let result = request
            .send()
            .await
            .map_err(|source| QiscusError::Transport { source })?;
        let latency = start.elapsed();

        let status_code = result.status().as_u16();
        let status = result.status().canonical_reason().map_or_else(
            || status_code.to_string(),
            |reason| format!("{status_code} {reason}"),
        );
        let proto = format!("{:?}", result.version());
        let response_headers = parse_response_headers(result.headers());

        let raw_body = result
            .bytes()
            .await
            .map_err(|source| QiscusError::Read {
                status_code,
                source,
            })?
            .to_vec();

        if config.outbound_log() {
            tracing::info!(
                method = %self.method,
                url = %url,
                body = %compact_json(self.body.as_deref().unwrap_or_default()),
                status = status_code,
                response = %compact_json(&raw_body),
                latency = ?latency,
                "outbound request"
            );
        }

        Ok(ApiResponse {
            status,
            status_code,
            proto,
            headers: response_headers,
            raw_body,
            request: RequestRecord {
                method: self.method,
                url: url.to_string(),
                body: self.body,
            },
        })
    }
}

fn check_status(response: ApiResponse) -> Result<ApiResponse, QiscusError> {
    if response.status_code >= 400 {
        return Err(QiscusError::Api {
            status_code: response.status_code,
            body: response.body_text().into_owned(),
            response,
        });
    }
    Ok(response)
}

/// Collects response headers into a lowercased multi-map.
fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

/// Returns the whitespace-stripped form of `data` when it is JSON, the raw
/// bytes as lossy text otherwise.
fn compact_json(data: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(data).map_or_else(
        |_| String::from_utf8_lossy(data).into_owned(),
        |value| value.to_string(),
    )
}

/// Builder for constructing [`ApiRequest`] instances.
///
/// # Example
///
/// ```rust
/// use qiscus_api::{ApiRequest, HttpMethod};
///
/// let request = ApiRequest::builder(HttpMethod::Get, "https://api.qiscus.com/api/v2.1/rest/get_user_list")
///     .param("page", "1")
///     .param("limit", "20")
///     .build();
///
/// assert_eq!(request.params.len(), 2);
/// ```
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: HttpMethod,
    url: String,
    headers: Vec<(String, String)>,
    params: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ApiRequestBuilder {
    /// Creates a new builder with the required method and URL.
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            params: Vec::new(),
            body: None,
        }
    }

    /// Appends a header. Registering the same name again appends another
    /// value rather than replacing the first.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter. Registering the same name again produces a
    /// repeated `key=value` pair, preserving order.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Sets a pre-serialized request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `payload` to JSON and buffers it as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`QiscusError::Build`] if serialization fails.
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self, QiscusError> {
        let bytes = serde_json::to_vec(payload)
            .map_err(|source| QiscusError::build(BuildError::Body(source)))?;
        self.body = Some(bytes);
        Ok(self)
    }

    /// Builds the [`ApiRequest`].
    #[must_use]
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            params: self.params,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_http_method_converts_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(
            reqwest::Method::from(HttpMethod::Delete),
            reqwest::Method::DELETE
        );
    }

    #[test]
    fn test_builder_creates_bare_get_request() {
        let request = ApiRequest::builder(HttpMethod::Get, "https://example.com/api").build();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://example.com/api");
        assert!(request.headers.is_empty());
        assert!(request.params.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_builder_preserves_repeated_params_in_order() {
        let request = ApiRequest::builder(HttpMethod::Get, "https://example.com/api")
            .param("ids[]", "1")
            .param("ids[]", "2")
            .param("ids[]", "3")
            .build();

        assert_eq!(
            request.params,
            vec![
                ("ids[]".to_string(), "1".to_string()),
                ("ids[]".to_string(), "2".to_string()),
                ("ids[]".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_builder_preserves_duplicate_headers() {
        let request = ApiRequest::builder(HttpMethod::Get, "https://example.com/api")
            .header("Content-Type", "application/json")
            .header("Content-Type", "text/plain")
            .build();

        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.headers[0].1, "application/json");
        assert_eq!(request.headers[1].1, "text/plain");
    }

    #[test]
    fn test_json_body_is_buffered_as_bytes() {
        #[derive(Serialize)]
        struct Payload {
            room_id: String,
        }

        let request = ApiRequest::builder(HttpMethod::Post, "https://example.com/api")
            .json(&Payload {
                room_id: "123".to_string(),
            })
            .unwrap()
            .build();

        assert_eq!(request.body.unwrap(), br#"{"room_id":"123"}"#.to_vec());
    }

    #[test]
    fn test_compact_json_strips_whitespace() {
        let pretty = b"{\n  \"a\": 1,\n  \"b\": [1, 2]\n}";
        assert_eq!(compact_json(pretty), r#"{"a":1,"b":[1,2]}"#);
    }

    #[test]
    fn test_compact_json_passes_through_invalid_input() {
        assert_eq!(compact_json(b"not json at all"), "not json at all");
        assert_eq!(compact_json(b""), "");
    }

    #[test]
    fn test_check_status_rejects_error_codes() {
        let response = ApiResponse {
            status: "404 Not Found".to_string(),
            status_code: 404,
            proto: "HTTP/1.1".to_string(),
            headers: HashMap::new(),
            raw_body: br#"{"error":"not found"}"#.to_vec(),
            request: RequestRecord {
                method: HttpMethod::Get,
                url: "https://example.com/api".to_string(),
                body: None,
            },
        };

        let error = check_status(response).unwrap_err();
        assert_eq!(error.status_code(), Some(404));
        assert!(error.to_string().contains("not found"));
    }
}

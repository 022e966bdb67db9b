//! Error types for the Qiscus HTTP request pipeline.
//!
//! Every call through the pipeline either succeeds or produces exactly one
//! [`QiscusError`]. The variants mirror the stages of the pipeline, in the
//! order the checks are applied:
//!
//! - [`QiscusError::Build`]: the request could not be constructed; nothing
//!   was sent
//! - [`QiscusError::Transport`]: the request never produced a response
//! - [`QiscusError::Read`]: a response arrived but its body could not be read
//! - [`QiscusError::Decode`]: the body is not valid JSON for the expected
//!   payload
//! - [`QiscusError::Api`]: the API answered with an error status (>= 400)
//!
//! # Example
//!
//! ```rust,ignore
//! match client.get_room_tags("12345").await {
//!     Ok(tags) => println!("tags: {:?}", tags.data),
//!     Err(err) => match err.status_code() {
//!         Some(404) => println!("room not found"),
//!         Some(code) => println!("api error {code}: {err}"),
//!         None => println!("request never reached the api: {err}"),
//!     },
//! }
//! ```

use thiserror::Error;

use crate::clients::response::ApiResponse;

/// Detail for a request that could not be constructed.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The request URL could not be parsed.
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    /// A caller-supplied header name is not a valid HTTP header name.
    #[error("invalid header name {name:?}")]
    HeaderName {
        /// The offending header name.
        name: String,
    },

    /// A caller-supplied header value is not a valid HTTP header value.
    #[error("invalid value for header {name:?}")]
    HeaderValue {
        /// The header whose value was rejected.
        name: String,
    },

    /// The request body could not be serialized to JSON.
    #[error("cannot serialize request body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Unified error type for all Qiscus API calls.
///
/// Carries the HTTP status code when a response was obtained, the underlying
/// low-level cause, and the raw [`ApiResponse`] envelope whenever the
/// response body was fully read. An error status (>= 400) always has an
/// envelope attached.
#[derive(Debug, Error)]
pub enum QiscusError {
    /// The request could not be constructed (malformed URL, invalid header,
    /// unserializable body). Nothing was sent.
    #[error("request creation failed: {source}")]
    Build {
        /// What made the request invalid.
        #[source]
        source: BuildError,
    },

    /// The request was sent but no response was received (timeout, refused
    /// connection, DNS failure).
    #[error("cannot send request: {source}")]
    Transport {
        /// The transport-level failure.
        #[source]
        source: reqwest::Error,
    },

    /// A response was received but reading its body failed. The envelope is
    /// not available: it is only assembled after a full body read.
    #[error("cannot read response body: {source}")]
    Read {
        /// Status code of the received response.
        status_code: u16,
        /// The read failure.
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be decoded into the expected payload.
    #[error("invalid body response, parse error during api request: {source}")]
    Decode {
        /// Status code of the received response.
        status_code: u16,
        /// The raw response, body included.
        response: ApiResponse,
        /// The decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with an error status code.
    #[error("qiscus api is returning error. http status code: {status_code} api response: {body}")]
    Api {
        /// The error status code (>= 400).
        status_code: u16,
        /// The response body as text, embedded in the message.
        body: String,
        /// The raw response, body included.
        response: ApiResponse,
    },
}

impl QiscusError {
    pub(crate) const fn build(source: BuildError) -> Self {
        Self::Build { source }
    }

    /// Returns the HTTP status code, if a response was obtained.
    ///
    /// `None` for [`Build`](Self::Build) and [`Transport`](Self::Transport)
    /// failures, which occur before any response exists.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Build { .. } | Self::Transport { .. } => None,
            Self::Read { status_code, .. }
            | Self::Decode { status_code, .. }
            | Self::Api { status_code, .. } => Some(*status_code),
        }
    }

    /// Returns the raw response envelope, if the response body was read.
    #[must_use]
    pub const fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::Decode { response, .. } | Self::Api { response, .. } => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::request::HttpMethod;
    use crate::clients::response::RequestRecord;
    use std::collections::HashMap;

    fn sample_envelope(code: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status: format!("{code} status"),
            status_code: code,
            proto: "HTTP/1.1".to_string(),
            headers: HashMap::new(),
            raw_body: body.as_bytes().to_vec(),
            request: RequestRecord {
                method: HttpMethod::Get,
                url: "https://multichannel.qiscus.com/api/v2/channels".to_string(),
                body: None,
            },
        }
    }

    #[test]
    fn test_build_error_has_no_status_code() {
        let error = QiscusError::build(BuildError::HeaderName {
            name: "bad header".to_string(),
        });
        assert_eq!(error.status_code(), None);
        assert!(error.response().is_none());
    }

    #[test]
    fn test_api_error_carries_status_and_envelope() {
        let body = r#"{"errors":"invalid room"}"#;
        let error = QiscusError::Api {
            status_code: 500,
            body: body.to_string(),
            response: sample_envelope(500, body),
        };

        assert_eq!(error.status_code(), Some(500));
        assert_eq!(error.response().unwrap().raw_body, body.as_bytes());
    }

    #[test]
    fn test_api_error_message_embeds_body_and_status() {
        let body = r#"{"errors":"invalid room"}"#;
        let error = QiscusError::Api {
            status_code: 500,
            body: body.to_string(),
            response: sample_envelope(500, body),
        };

        let message = error.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("invalid room"));
    }

    #[test]
    fn test_decode_error_carries_status_and_envelope() {
        let raw = "not json";
        let source = serde_json::from_str::<serde_json::Value>(raw).unwrap_err();
        let error = QiscusError::Decode {
            status_code: 200,
            response: sample_envelope(200, raw),
            source,
        };

        assert_eq!(error.status_code(), Some(200));
        assert_eq!(error.response().unwrap().body_text(), raw);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_error_implements_std_error_with_source() {
        use std::error::Error as _;

        let error = QiscusError::build(BuildError::Url(url::ParseError::EmptyHost));
        assert!(error.source().is_some());
    }
}

//! HTTP request pipeline for Qiscus API communication.
//!
//! This module provides the shared request/response layer that both domain
//! clients delegate to. It handles request construction, query parameter and
//! header injection, execution on the configured shared client, raw response
//! capture, JSON decoding, failure classification, and optional outbound
//! logging.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiRequest`] / [`ApiRequestBuilder`]: an outbound request and its
//!   builder
//! - [`ApiResponse`]: the raw response envelope (status, headers, body bytes,
//!   originating request)
//! - [`QiscusError`]: the uniform error type produced by every failing call
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`QiscusClient`]: the capability set shared by both domain clients
//!
//! # Failure classification
//!
//! Checks are applied in pipeline order (build, transport, read, decode,
//! api) and exactly one [`QiscusError`] variant is produced per failing
//! call. A response envelope is attached whenever the body was fully read, so
//! callers can branch on `status_code()` and inspect the verbatim bytes even
//! when typed decoding failed.

mod errors;
mod request;
mod response;

pub use errors::{BuildError, QiscusError};
pub use request::{ApiRequest, ApiRequestBuilder, HttpMethod, SDK_VERSION};
pub use response::{ApiResponse, RequestRecord};

/// The capability set shared by the Qiscus domain clients.
///
/// Both [`crate::multichannel::MultichannelClient`] and
/// [`crate::sdk::SdkClient`] hold the same configuration surface, a mutable
/// base URL plus read-only credentials, expressed as this trait on two
/// otherwise-independent structs.
///
/// # Example
///
/// ```rust
/// use qiscus_api::{AppId, QiscusClient, SecretKey};
/// use qiscus_api::multichannel::MultichannelClient;
///
/// let mut client = MultichannelClient::new(
///     AppId::new("my-app").unwrap(),
///     SecretKey::new("my-secret").unwrap(),
/// );
///
/// assert_eq!(client.api_base(), "https://multichannel.qiscus.com");
/// client.set_api_base("https://multichannel-test.qiscus.com");
/// assert_eq!(client.api_base(), "https://multichannel-test.qiscus.com");
/// ```
pub trait QiscusClient {
    /// Returns the API base URL configured for this client.
    fn api_base(&self) -> &str;

    /// Overrides the API base URL for this client.
    fn set_api_base(&mut self, address: &str);

    /// Returns the app ID configured for this client.
    fn app_id(&self) -> &crate::config::AppId;

    /// Returns the secret key configured for this client.
    fn secret_key(&self) -> &crate::config::SecretKey;
}

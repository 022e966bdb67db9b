//! Configuration types for the Qiscus SDK.
//!
//! This module provides the configuration passed to the HTTP request
//! pipeline: the shared `reqwest` client, its timeout, and the outbound
//! logging switch.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`QiscusConfig`]: the pipeline configuration shared by every request
//! - [`QiscusConfigBuilder`]: a builder for constructing [`QiscusConfig`]
//! - [`AppId`]: a validated app ID newtype
//! - [`SecretKey`]: a validated secret key newtype with masked debug output
//!
//! Configuration is explicit: clients receive a [`QiscusConfig`] at
//! construction and it is immutable afterward. A lazily-initialized
//! process-wide instance is available through [`QiscusConfig::shared`] purely
//! for ergonomic convenience, so default-constructed clients share a single
//! connection pool.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use qiscus_api::QiscusConfig;
//!
//! let config = QiscusConfig::builder()
//!     .timeout(Duration::from_secs(10))
//!     .outbound_log(true)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.outbound_log());
//! ```

mod newtypes;

pub use newtypes::{AppId, SecretKey};

use std::sync::OnceLock;
use std::time::Duration;

use crate::error::ConfigError;

/// Default timeout applied to the shared HTTP client.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(80);

static SHARED: OnceLock<QiscusConfig> = OnceLock::new();

/// Configuration for the Qiscus HTTP request pipeline.
///
/// Holds the shared `reqwest::Client` used for every request issued through
/// this configuration, and the outbound-log flag. The client is internally
/// reference-counted, so cloning a `QiscusConfig` shares its connection pool.
///
/// # Thread Safety
///
/// `QiscusConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks. Instances are immutable after
/// construction.
///
/// # Example
///
/// ```rust
/// use qiscus_api::QiscusConfig;
///
/// let config = QiscusConfig::builder().build().unwrap();
/// assert!(!config.outbound_log());
/// ```
#[derive(Clone, Debug)]
pub struct QiscusConfig {
    http_client: reqwest::Client,
    outbound_log: bool,
}

// Verify QiscusConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QiscusConfig>();
};

impl QiscusConfig {
    /// Creates a new builder for constructing a `QiscusConfig`.
    #[must_use]
    pub fn builder() -> QiscusConfigBuilder {
        QiscusConfigBuilder::new()
    }

    /// Returns the process-wide default configuration.
    ///
    /// The instance is created on first use with [`DEFAULT_HTTP_TIMEOUT`] and
    /// outbound logging disabled. Every client constructed without an
    /// explicit configuration clones this instance and therefore shares its
    /// connection pool.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created on first use.
    /// This should only happen in extremely unusual circumstances (e.g. TLS
    /// initialization failure).
    #[must_use]
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::default)
    }

    /// Returns the shared HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns whether outbound request/response logging is enabled.
    #[must_use]
    pub const fn outbound_log(&self) -> bool {
        self.outbound_log
    }
}

impl Default for QiscusConfig {
    /// Builds a configuration with [`DEFAULT_HTTP_TIMEOUT`] and outbound
    /// logging disabled.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created. Use
    /// [`QiscusConfig::builder`] to handle that failure as a `Result`.
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("Failed to create HTTP client")
    }
}

/// Builder for constructing [`QiscusConfig`] instances.
///
/// # Defaults
///
/// - `timeout`: [`DEFAULT_HTTP_TIMEOUT`] (80 seconds)
/// - `outbound_log`: `false`
/// - `http_client`: a fresh `reqwest::Client` honoring the timeout above;
///   supplying a client via [`http_client`](Self::http_client) overrides the
///   timeout setting entirely
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use qiscus_api::QiscusConfig;
///
/// let config = QiscusConfig::builder()
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct QiscusConfigBuilder {
    http_client: Option<reqwest::Client>,
    timeout: Option<Duration>,
    outbound_log: Option<bool>,
}

impl QiscusConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitutes a pre-built HTTP client.
    ///
    /// The client is used as-is; any [`timeout`](Self::timeout) value set on
    /// this builder is ignored.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the request timeout for the default HTTP client.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables or disables the outbound request/response log.
    #[must_use]
    pub const fn outbound_log(mut self, enabled: bool) -> Self {
        self.outbound_log = Some(enabled);
        self
    }

    /// Builds the [`QiscusConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the default HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<QiscusConfig, ConfigError> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .use_rustls_tls()
                .timeout(self.timeout.unwrap_or(DEFAULT_HTTP_TIMEOUT))
                .build()
                .map_err(|source| ConfigError::HttpClient { source })?,
        };

        Ok(QiscusConfig {
            http_client,
            outbound_log: self.outbound_log.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = QiscusConfig::builder().build().unwrap();
        assert!(!config.outbound_log());
    }

    #[test]
    fn test_builder_enables_outbound_log() {
        let config = QiscusConfig::builder().outbound_log(true).build().unwrap();
        assert!(config.outbound_log());
    }

    #[test]
    fn test_builder_accepts_substitute_client() {
        let client = reqwest::Client::new();
        let config = QiscusConfig::builder()
            .http_client(client)
            .build()
            .unwrap();
        assert!(!config.outbound_log());
    }

    #[test]
    fn test_shared_returns_same_instance() {
        let a = QiscusConfig::shared();
        let b = QiscusConfig::shared();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = QiscusConfig::builder().build().unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.outbound_log(), config.outbound_log());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("QiscusConfig"));
    }
}

//! Configuration error types for the Qiscus SDK.
//!
//! This module contains error types for configuration and client
//! bootstrapping. Failures inside the HTTP request pipeline are reported
//! through [`crate::clients::QiscusError`] instead.
//!
//! # Example
//!
//! ```rust
//! use qiscus_api::{AppId, ConfigError};
//!
//! let result = AppId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAppId)));
//! ```

use thiserror::Error;

use crate::clients::QiscusError;

/// Errors that can occur while configuring the SDK or constructing a client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// App ID cannot be empty.
    #[error("App ID cannot be empty. Please provide a valid Qiscus app ID.")]
    EmptyAppId,

    /// Secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide a valid Qiscus secret key.")]
    EmptySecretKey,

    /// A required environment variable is not set.
    #[error("required environment variable {name} not defined")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: &'static str,
    },

    /// The underlying HTTP client could not be created.
    #[error("failed to initialize http client: {source}")]
    HttpClient {
        /// The reqwest construction error.
        #[source]
        source: reqwest::Error,
    },

    /// The admin-credential login used to bootstrap a client failed.
    #[error("initiate client from credential failed: {source}")]
    CredentialLogin {
        /// The pipeline error returned by the login call.
        #[source]
        source: Box<QiscusError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_app_id_error_message() {
        let error = ConfigError::EmptyAppId;
        let message = error.to_string();
        assert!(message.contains("App ID cannot be empty"));
    }

    #[test]
    fn test_missing_env_var_error_message() {
        let error = ConfigError::MissingEnvVar {
            name: "QISCUS_APP_ID",
        };
        let message = error.to_string();
        assert!(message.contains("QISCUS_APP_ID"));
        assert!(message.contains("not defined"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptySecretKey;
        let _: &dyn std::error::Error = &error;
    }
}

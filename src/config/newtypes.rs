//! Validated newtype wrappers for Qiscus credentials.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Qiscus app ID.
///
/// This newtype ensures the app ID is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use qiscus_api::AppId;
///
/// let app_id = AppId::new("my-app-id").unwrap();
/// assert_eq!(app_id.as_ref(), "my-app-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppId(String);

impl AppId {
    /// Creates a new validated app ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppId`] if the value is empty.
    pub fn new(app_id: impl Into<String>) -> Result<Self, ConfigError> {
        let app_id = app_id.into();
        if app_id.is_empty() {
            return Err(ConfigError::EmptyAppId);
        }
        Ok(Self(app_id))
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Qiscus secret key.
///
/// This newtype ensures the secret key is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SecretKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use qiscus_api::SecretKey;
///
/// let secret = SecretKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecretKey`] if the value is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptySecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_id_rejects_empty_string() {
        let result = AppId::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAppId)));
    }

    #[test]
    fn test_app_id_preserves_value() {
        let app_id = AppId::new("sample-app-id").unwrap();
        assert_eq!(app_id.as_ref(), "sample-app-id");
        assert_eq!(app_id.to_string(), "sample-app-id");
    }

    #[test]
    fn test_secret_key_rejects_empty_string() {
        let result = SecretKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptySecretKey)));
    }

    #[test]
    fn test_secret_key_masks_value_in_debug() {
        let secret = SecretKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "SecretKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }
}

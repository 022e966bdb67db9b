//! Client for the Qiscus Multichannel API.

use std::env;

use crate::clients::{ApiRequest, ApiRequestBuilder, HttpMethod, QiscusClient};
use crate::config::{AppId, QiscusConfig, SecretKey};
use crate::error::ConfigError;
use crate::multichannel::request::LoginAdminReq;
use crate::multichannel::response::LoginAdminResponse;

/// Base URL the library uses to contact Multichannel. Use
/// [`QiscusClient::set_api_base`] to override.
pub const API_BASE: &str = "https://multichannel.qiscus.com";

/// Client for the Multichannel customer-service API.
///
/// Holds the base URL, credentials, and pipeline configuration; every
/// endpoint method is a thin caller of the shared request pipeline,
/// authenticating with the `Qiscus-App-Id` and `Qiscus-Secret-Key` headers.
///
/// # Example
///
/// ```rust,ignore
/// use qiscus_api::{AppId, SecretKey};
/// use qiscus_api::multichannel::{CreateRoomTagReq, MultichannelClient};
///
/// let client = MultichannelClient::new(
///     AppId::new("qiscus-app-id")?,
///     SecretKey::new("qiscus-secret-key")?,
/// );
///
/// let created = client
///     .create_room_tag(&CreateRoomTagReq {
///         room_id: "12345678".to_string(),
///         tag: "test".to_string(),
///     })
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct MultichannelClient {
    api_base: String,
    app_id: AppId,
    secret_key: SecretKey,
    config: QiscusConfig,
}

// Verify MultichannelClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MultichannelClient>();
};

impl MultichannelClient {
    /// Creates a new client instance using the process-wide shared
    /// configuration.
    #[must_use]
    pub fn new(app_id: AppId, secret_key: SecretKey) -> Self {
        Self::with_config(app_id, secret_key, QiscusConfig::shared().clone())
    }

    /// Creates a new client instance with an explicit configuration.
    #[must_use]
    pub fn with_config(app_id: AppId, secret_key: SecretKey, config: QiscusConfig) -> Self {
        Self {
            api_base: API_BASE.to_string(),
            app_id,
            secret_key,
            config,
        }
    }

    /// Creates a new client from the environment variables `QISCUS_APP_ID`,
    /// `QISCUS_SECRET_KEY` and, if set, `MULTICHANNEL_API_BASE`.
    ///
    /// The variables are read once, here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when a required variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_id = env::var("QISCUS_APP_ID")
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingEnvVar {
                name: "QISCUS_APP_ID",
            })?;
        let secret_key = env::var("QISCUS_SECRET_KEY")
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingEnvVar {
                name: "QISCUS_SECRET_KEY",
            })?;

        let mut client = Self::new(AppId::new(app_id)?, SecretKey::new(secret_key)?);

        if let Ok(url) = env::var("MULTICHANNEL_API_BASE") {
            if !url.is_empty() {
                client.set_api_base(&url);
            }
        }

        Ok(client)
    }

    /// Creates a new client by logging in with admin credentials; the app ID
    /// and secret key are taken from the login response.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CredentialLogin`] when the login call fails and
    /// [`ConfigError::EmptyAppId`]/[`ConfigError::EmptySecretKey`] when the
    /// response carries no usable credentials.
    pub async fn from_credential(email: &str, password: &str) -> Result<Self, ConfigError> {
        let config = QiscusConfig::shared().clone();
        let url = format!("{API_BASE}/api/v1/auth");
        let req = LoginAdminReq {
            email: email.to_string(),
            password: password.to_string(),
        };

        let resp: LoginAdminResponse = ApiRequest::builder(HttpMethod::Post, url)
            .json(&req)
            .map_err(|source| ConfigError::CredentialLogin {
                source: Box::new(source),
            })?
            .build()
            .send_json(&config)
            .await
            .map_err(|source| ConfigError::CredentialLogin {
                source: Box::new(source),
            })?;

        let app = resp.data.user.app;
        Ok(Self::with_config(
            AppId::new(app.app_code)?,
            SecretKey::new(app.secret_key)?,
            config,
        ))
    }

    /// Returns the pipeline configuration used by this client.
    #[must_use]
    pub const fn config(&self) -> &QiscusConfig {
        &self.config
    }

    /// Starts a request against this client's base URL with the Multichannel
    /// authentication headers applied.
    pub(crate) fn request(&self, method: HttpMethod, url: &str) -> ApiRequestBuilder {
        ApiRequest::builder(method, url)
            .header("Qiscus-App-Id", self.app_id.as_ref())
            .header("Qiscus-Secret-Key", self.secret_key.as_ref())
    }
}

impl QiscusClient for MultichannelClient {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn set_api_base(&mut self, address: &str) {
        self.api_base = address.to_string();
    }

    fn app_id(&self) -> &AppId {
        &self.app_id
    }

    fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> MultichannelClient {
        MultichannelClient::new(
            AppId::new("test-qiscus-app-id").unwrap(),
            SecretKey::new("test-qiscus-secret-key").unwrap(),
        )
    }

    #[test]
    fn test_new_exposes_credentials_and_default_base() {
        let client = create_test_client();

        assert_eq!(client.api_base(), API_BASE);
        assert_eq!(client.app_id().as_ref(), "test-qiscus-app-id");
        assert_eq!(client.secret_key().as_ref(), "test-qiscus-secret-key");
    }

    #[test]
    fn test_set_api_base_overrides_default() {
        let mut client = create_test_client();
        client.set_api_base("https://multichannel-test.qiscus.com");
        assert_eq!(client.api_base(), "https://multichannel-test.qiscus.com");
    }

    #[test]
    fn test_request_applies_auth_headers() {
        let client = create_test_client();
        let request = client
            .request(HttpMethod::Get, "https://example.com/api/v2/channels")
            .build();

        assert_eq!(
            request.headers,
            vec![
                (
                    "Qiscus-App-Id".to_string(),
                    "test-qiscus-app-id".to_string()
                ),
                (
                    "Qiscus-Secret-Key".to_string(),
                    "test-qiscus-secret-key".to_string()
                ),
            ]
        );
    }
}

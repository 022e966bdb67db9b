//! # Qiscus API Rust SDK
//!
//! A Rust SDK for the Qiscus REST APIs, exposing the Multichannel
//! customer-service platform and the SDK messaging platform as typed
//! request/response call wrappers over a shared HTTP pipeline.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A generic request/response pipeline with uniform failure classification
//!   via [`clients::ApiRequest`] and [`QiscusError`]
//! - Raw response capture for debugging via [`ApiResponse`]
//! - Explicit, immutable pipeline configuration via [`QiscusConfig`]
//! - Validated newtypes for credentials ([`AppId`], [`SecretKey`])
//! - One async method per API endpoint on
//!   [`multichannel::MultichannelClient`] and [`sdk::SdkClient`]
//! - Optional structured outbound logging of request/response pairs with
//!   latency, via `tracing`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use qiscus_api::{AppId, SecretKey};
//! use qiscus_api::multichannel::{CreateRoomTagReq, MultichannelClient};
//! use qiscus_api::sdk::{LoginOrRegisterReq, SdkClient};
//!
//! // Client for Multichannel
//! let multichannel = MultichannelClient::new(
//!     AppId::new("qiscus-app-id")?,
//!     SecretKey::new("qiscus-secret-key")?,
//! );
//!
//! let tag = multichannel
//!     .create_room_tag(&CreateRoomTagReq {
//!         room_id: "12345678".to_string(),
//!         tag: "test".to_string(),
//!     })
//!     .await?;
//!
//! // Client for the messaging SDK
//! let sdk = SdkClient::new(
//!     AppId::new("qiscus-app-id")?,
//!     SecretKey::new("qiscus-secret-key")?,
//! );
//!
//! let user = sdk
//!     .login_or_register(&LoginOrRegisterReq {
//!         user_id: "guest@qiscus.com".to_string(),
//!         password: "12345678".to_string(),
//!         username: "User Demo".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Configuration
//!
//! Clients constructed with `new` share the process-wide
//! [`QiscusConfig::shared`] instance (80-second timeout, logging off). Pass
//! an explicit configuration with `with_config` to substitute an HTTP
//! client, change the timeout, or enable the outbound log:
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use qiscus_api::{AppId, QiscusConfig, SecretKey};
//! use qiscus_api::sdk::SdkClient;
//!
//! let config = QiscusConfig::builder()
//!     .timeout(Duration::from_secs(10))
//!     .outbound_log(true)
//!     .build()?;
//!
//! let sdk = SdkClient::with_config(
//!     AppId::new("qiscus-app-id")?,
//!     SecretKey::new("qiscus-secret-key")?,
//!     config,
//! );
//! ```
//!
//! Base URLs default to the production hosts and can be overridden with
//! [`QiscusClient::set_api_base`] or, at construction, through the
//! `MULTICHANNEL_API_BASE` / `QISCUS_API_BASE` environment variables read by
//! the `from_env` constructors.
//!
//! ## Error Handling
//!
//! Every endpoint method returns `Result<_, QiscusError>`. The error
//! variants follow the pipeline stages (build, transport, read, decode,
//! api), and a raw [`ApiResponse`] envelope is attached whenever the
//! response body was read, so remote failures can be inspected byte for
//! byte:
//!
//! ```rust,ignore
//! match sdk.get_user_profile("guest@qiscus.com").await {
//!     Ok(profile) => println!("{}", profile.results.user.username),
//!     Err(err) => {
//!         if let Some(response) = err.response() {
//!             eprintln!("api said: {}", response.body_text());
//!         }
//!         eprintln!("call failed: {err}");
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No hidden global state**: configuration is instance-based and passed
//!   explicitly; the shared default exists only for convenience
//! - **Fail-fast validation**: credential newtypes validate on construction
//! - **Thread-safe**: all shared types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **One round trip per call**: no retries, no internal concurrency

pub mod clients;
pub mod config;
pub mod error;
pub mod multichannel;
pub mod sdk;

// Re-export public types at crate root for convenience
pub use config::{AppId, QiscusConfig, QiscusConfigBuilder, SecretKey, DEFAULT_HTTP_TIMEOUT};
pub use error::ConfigError;

// Re-export HTTP pipeline types
pub use clients::{
    ApiRequest, ApiRequestBuilder, ApiResponse, BuildError, HttpMethod, QiscusClient, QiscusError,
    RequestRecord, SDK_VERSION,
};

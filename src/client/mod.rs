//! # O*NET HTTP Client
//!
//! This module provides a direct HTTP client for O*NET Web Services, handling
//! Basic authentication, request construction and response normalization.
//!
//! ## Modules
//!
//! - [`auth`] - Credentials and Basic auth token derivation
//! - [`config`] - Request template shared by every call
//! - [`client`] - Main HTTP client with the generic call and interest profiler methods
//! - [`error`] - Typed failure outcomes of a call
//! - [`types`] - Response envelope, query parameters and request types
//!
//! ## Quick Start
//!
//! ```no_run
//! use onet_web_services::client::OnetClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OnetClient::with_credentials("username", "password")?
//!     .set_base_url(None)
//!     .set_token(None);
//!
//! let response = client.get_job_zones().await;
//! if response.success {
//!     println!("{}", response.data);
//! } else {
//!     eprintln!("{:?}", response.errors);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use auth::Credentials;
pub use client::OnetClient;
pub use error::CallError;
pub use types::*;

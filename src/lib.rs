//! # O*NET Web Services Library
//!
//! A small authenticated client for the O*NET Web Services API, focused on
//! the "My Next Move" interest profiler endpoints.
//!
//! Every call returns an [`ApiResponse`] envelope instead of an error:
//!
//! - `success` is true only for an HTTP 200, with the parsed body in `data`
//! - a 422 keeps `success` false but puts the validation payload in `data`
//! - any other failure adds one message to `errors`
//!
//! ## Quick Start
//!
//! ```no_run
//! use onet_web_services::{InterestArea, OnetClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OnetClient::with_credentials("username", "password")?.set_token(None);
//!
//! let careers = client
//!     .get_interest_profiler_results_by_area(InterestArea::Social, Some(3))
//!     .await;
//! println!("{}", serde_json::to_string_pretty(&careers)?);
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{ApiResponse, CallError, Credentials, InterestArea, OnetClient, Query, RiasecScores};

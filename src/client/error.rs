//! Typed outcomes for failed O*NET calls.
//!
//! Each variant renders to the exact message placed in
//! [`ApiResponse::errors`](crate::client::types::ApiResponse), except
//! [`CallError::Validation`], which is surfaced as data instead.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The server answered with a status other than 200 or 422.
    #[error("Call to {url} failed with error code {status}")]
    Status { url: String, status: u16 },

    /// The server rejected the parameters with 422; `body` holds its details.
    #[error("Call to {url} failed with error code 422")]
    Validation { url: String, body: Value },

    /// Nothing usable came back: connection refused, DNS failure, timeout,
    /// or a connection dropped mid-body.
    #[error("Call to {url} failed with no response from server")]
    NoResponse { url: String, reason: String },

    /// The request could not be built or its parameters could not be encoded.
    #[error("Call to {url} failed with reason {reason}")]
    Request { url: String, reason: String },
}

impl CallError {
    pub fn url(&self) -> &str {
        match self {
            CallError::Status { url, .. }
            | CallError::Validation { url, .. }
            | CallError::NoResponse { url, .. }
            | CallError::Request { url, .. } => url,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CallError::Status { status, .. } => Some(*status),
            CallError::Validation { .. } => Some(422),
            _ => None,
        }
    }

    /// Classifies a transport error that came back without a usable response.
    ///
    /// A body cut short after the status line still counts as no response.
    pub fn from_transport(url: String, err: &reqwest::Error) -> Self {
        if err.is_connect()
            || err.is_timeout()
            || err.is_body()
            || err.is_decode()
            || (err.is_request() && !err.is_builder())
        {
            CallError::NoResponse {
                url,
                reason: err.to_string(),
            }
        } else {
            CallError::Request {
                url,
                reason: err.to_string(),
            }
        }
    }
}

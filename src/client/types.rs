//! Type definitions for the O*NET Web Services API.
//!
//! ## Key Types
//!
//! - [`ApiResponse`] - Uniform envelope returned by every client call
//! - [`Query`] - Ordered query string parameters for a call
//! - [`RiasecScores`] - Six interest scores used to look up matching careers
//! - [`InterestArea`] - One of the six RIASEC interest areas
//!
//! Response bodies are kept as raw [`serde_json::Value`]s. O*NET returns
//! different shapes per endpoint and callers usually just forward them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::client::error::CallError;

/// Uniform result of an O*NET call.
///
/// Callers should check `success` (or `errors`) rather than relying on `data`
/// alone: a 422 response carries the validation payload in `data` while
/// `success` stays false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// True only when the server answered with HTTP 200
    pub success: bool,
    /// Parsed response body, `{}` when nothing was received
    pub data: Value,
    /// Human-readable failure descriptions, in the order they occurred
    pub errors: Vec<String>,
}

impl Default for ApiResponse {
    fn default() -> Self {
        Self {
            success: false,
            data: Value::Object(Map::new()),
            errors: Vec::new(),
        }
    }
}

impl ApiResponse {
    /// Folds a typed call outcome into the envelope.
    pub fn from_outcome(outcome: Result<Value, CallError>) -> Self {
        let mut response = Self::default();

        match outcome {
            Ok(data) => {
                response.success = true;
                response.data = data;
            }
            Err(CallError::Validation { body, .. }) => {
                response.data = body;
            }
            Err(e) => {
                response.errors.push(e.to_string());
            }
        }

        response
    }
}

/// Query string parameters for a single call.
///
/// Parameters keep their insertion order, and both names and values are
/// percent-encoded when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl ToString) {
        self.params.push((name.into(), value.to_string()));
    }

    /// Flattens a serializable parameter object into a query.
    ///
    /// The value must serialize to a JSON object whose fields are strings,
    /// numbers or booleans. `null` fields are skipped.
    pub fn from_serializable<T: Serialize + ?Sized>(params: &T) -> Result<Self, String> {
        let value = serde_json::to_value(params).map_err(|e| e.to_string())?;

        let fields = match value {
            Value::Object(fields) => fields,
            Value::Null => return Ok(Self::new()),
            other => return Err(format!("query parameters must be an object, got {}", other)),
        };

        let mut query = Self::new();
        for (name, value) in fields {
            match value {
                Value::Null => {}
                Value::String(s) => query.push(name, s),
                Value::Number(n) => query.push(name, n),
                Value::Bool(b) => query.push(name, b),
                _ => return Err(format!("query parameter '{}' is not a scalar", name)),
            }
        }

        Ok(query)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Renders `key=value&...` without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Appends the query to `path`, or returns `path` unchanged when empty.
    pub fn apply_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.to_query_string())
        }
    }
}

/// Interest scores for the six RIASEC areas.
///
/// O*NET expects each score as its own query parameter, capitalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RiasecScores {
    pub realistic: u32,
    pub investigative: u32,
    pub artistic: u32,
    pub social: u32,
    pub enterprising: u32,
    pub conventional: u32,
}

/// One of the six RIASEC interest areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestArea {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl InterestArea {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestArea::Realistic => "realistic",
            InterestArea::Investigative => "investigative",
            InterestArea::Artistic => "artistic",
            InterestArea::Social => "social",
            InterestArea::Enterprising => "enterprising",
            InterestArea::Conventional => "conventional",
        }
    }
}

impl fmt::Display for InterestArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

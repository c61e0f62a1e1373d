//! Request template shared by every call a client makes.

use std::collections::BTreeMap;

pub const DEFAULT_BASE_URL: &str = "https://services.onetcenter.org/ws/";
pub const USER_AGENT: &str = "nodejs-OnetWebService/1.00 (bot)";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Everything needed to address one request.
///
/// The client builds one of these at construction and clones it for every
/// call, filling in `path` with the endpoint and its query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub base_url: String,
    pub path: String,
    pub method: reqwest::Method,
    pub headers: BTreeMap<String, String>,
    pub timeout_ms: u64,
    pub max_redirects: usize,
}

impl RequestConfig {
    /// Builds the template with the fixed headers and the given authorization value.
    pub fn base(authorization: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("User-Agent".to_string(), USER_AGENT.to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Authorization".to_string(), authorization);

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: String::new(),
            method: reqwest::Method::GET,
            headers,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_redirects: 0,
        }
    }

    pub fn set_authorization(&mut self, value: String) {
        self.headers.insert("Authorization".to_string(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.base_url.is_empty() && self.headers.is_empty()
    }

    /// `{base_url}{path}`, as it appears in error messages.
    pub fn display_url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    /// Absolute URL to send the request to.
    ///
    /// Joins base and path with exactly one `/`, so a base URL with or
    /// without a trailing slash addresses the same endpoint.
    pub fn request_url(&self) -> String {
        if self.path.is_empty() {
            return self.base_url.clone();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

use anyhow::{Context, Result};
use reqwest::{redirect::Policy, Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::client::{
    auth::Credentials,
    config::{RequestConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS},
    error::CallError,
    types::*,
};

const JOB_ZONES: &str = "mnm/interestprofiler/job_zones";
const QUESTIONS_30: &str = "mnm/interestprofiler/questions_30";
const QUESTIONS_60: &str = "mnm/interestprofiler/questions";
const RESULTS: &str = "mnm/interestprofiler/results";
const CAREERS: &str = "mnm/interestprofiler/careers";

pub struct OnetClient {
    client: Client,
    credentials: Credentials,
    config: RequestConfig,
}

impl OnetClient {
    pub fn new(credentials: Credentials) -> Result<Self> {
        let config = base_config(&credentials, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS);
        let redirect = match config.max_redirects {
            0 => Policy::none(),
            n => Policy::limited(n),
        };
        let client = Client::builder()
            .redirect(redirect)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            credentials,
            config,
        })
    }

    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::new(Credentials::new(username, password))
    }

    /// Replaces the credentials. The token is not re-derived until
    /// [`OnetClient::set_token`] is called.
    pub fn set_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials.set(username, password);
        self
    }

    /// Points the client at `url`, or back at the public O*NET endpoint when
    /// `url` is `None` or empty.
    pub fn set_base_url(mut self, url: Option<&str>) -> Self {
        self.config.base_url = match url {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => DEFAULT_BASE_URL.to_string(),
        };
        self
    }

    pub fn set_token(mut self, token: Option<&str>) -> Self {
        self.credentials.derive_token(token);
        self.config
            .set_authorization(self.credentials.authorization_header());
        tracing::debug!("Authorization token set: {}", self.credentials.token_preview());
        self
    }

    /// Sets how long a call waits for the server before giving up.
    pub fn set_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Fresh request template for the current credentials, base URL and timeout.
    pub fn build_base_config(&self) -> RequestConfig {
        base_config(&self.credentials, &self.config.base_url, self.config.timeout_ms)
    }

    pub fn is_configured(&self) -> bool {
        !self.config.is_empty()
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn token(&self) -> &str {
        self.credentials.token()
    }

    /// Issues one GET to `path` and returns the typed outcome.
    ///
    /// A 200 yields the parsed body. Any other status, or a transport
    /// failure, yields the matching [`CallError`].
    pub async fn execute(&self, path: &str, query: &Query) -> Result<Value, CallError> {
        let mut config = self.config.clone();
        config.path = query.apply_to(path);

        let url = config.display_url();
        let request_url = config.request_url();
        tracing::debug!("GET {}", request_url);

        let mut request = self
            .client
            .request(config.method.clone(), request_url.as_str())
            .timeout(Duration::from_millis(config.timeout_ms));
        for (name, value) in &config.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| CallError::from_transport(url.clone(), &e))?;

        let status = response.status().as_u16();
        tracing::debug!("Response status for {}: {}", url, status);

        match status {
            200 => read_body(response, &url).await,
            422 => {
                let body = read_body(response, &url).await?;
                Err(CallError::Validation { url, body })
            }
            _ => Err(CallError::Status { url, status }),
        }
    }

    /// Issues one GET to `path` and folds every outcome into an [`ApiResponse`].
    ///
    /// Never fails: transport and status problems end up in `errors`.
    pub async fn call(&self, path: &str, query: &Query) -> ApiResponse {
        let outcome = self.execute(path, query).await;
        if let Err(e) = &outcome {
            log_failure(e);
        }
        ApiResponse::from_outcome(outcome)
    }

    /// Like [`OnetClient::call`], with the query taken from a serializable
    /// parameter object.
    pub async fn call_with<T: Serialize + ?Sized>(&self, path: &str, params: &T) -> ApiResponse {
        match Query::from_serializable(params) {
            Ok(query) => self.call(path, &query).await,
            Err(reason) => {
                let error = CallError::Request {
                    url: format!("{}{}", self.config.base_url, path),
                    reason,
                };
                log_failure(&error);
                ApiResponse::from_outcome(Err(error))
            }
        }
    }

    // Interest profiler
    pub async fn get_job_zones(&self) -> ApiResponse {
        self.call(JOB_ZONES, &Query::new()).await
    }

    pub async fn get_interest_profiler_30(&self, start: Option<u32>, end: Option<u32>) -> ApiResponse {
        let query = Query::new()
            .param("start", start.unwrap_or(1))
            .param("end", end.unwrap_or(30));
        self.call(QUESTIONS_30, &query).await
    }

    pub async fn get_interest_profiler_60(&self, start: Option<u32>, end: Option<u32>) -> ApiResponse {
        let query = Query::new()
            .param("start", start.unwrap_or(1))
            .param("end", end.unwrap_or(60));
        self.call(QUESTIONS_60, &query).await
    }

    pub async fn get_interest_profiler_results(&self, answers: &str) -> ApiResponse {
        self.call(RESULTS, &Query::new().param("answers", answers)).await
    }

    pub async fn get_interest_profiler_matching_careers_by_answers(
        &self,
        answers: &str,
        job_zone: Option<i32>,
    ) -> ApiResponse {
        let query = with_job_zone(Query::new().param("answers", answers), job_zone);
        self.call(CAREERS, &query).await
    }

    pub async fn get_interest_profiler_matching_careers_by_riasec(&self, scores: &RiasecScores) -> ApiResponse {
        self.call_with(CAREERS, scores).await
    }

    pub async fn get_interest_profiler_results_by_area(
        &self,
        area: InterestArea,
        job_zone: Option<i32>,
    ) -> ApiResponse {
        let query = with_job_zone(Query::new().param("area", area), job_zone);
        self.call(RESULTS, &query).await
    }
}

fn base_config(credentials: &Credentials, base_url: &str, timeout_ms: u64) -> RequestConfig {
    let mut config = RequestConfig::base(credentials.authorization_header());
    config.base_url = base_url.to_string();
    config.timeout_ms = timeout_ms;
    config
}

/// Adds `job_zone` only for zones 1 through 5.
fn with_job_zone(query: Query, job_zone: Option<i32>) -> Query {
    match job_zone {
        Some(zone) if zone > 0 && zone < 6 => query.param("job_zone", zone),
        _ => query,
    }
}

async fn read_body(response: Response, url: &str) -> Result<Value, CallError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| CallError::from_transport(url.to_string(), &e))?;

    // Bodies that are not JSON are passed through as a string
    Ok(serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned())))
}

fn log_failure(error: &CallError) {
    match error {
        CallError::Validation { url, body } => {
            tracing::warn!("Validation failed for {}: {}", url, body);
        }
        CallError::NoResponse { reason, .. } | CallError::Request { reason, .. } => {
            tracing::error!("{}: {}", error, reason);
        }
        CallError::Status { .. } => {
            tracing::error!("{}", error);
        }
    }
}

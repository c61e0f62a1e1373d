//! Credential handling for O*NET Web Services.
//!
//! O*NET authenticates every request with HTTP Basic auth. There is no token
//! exchange endpoint: the token is simply `base64("{username}:{password}")`,
//! or a pre-computed value supplied by the caller.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// # O*NET Credentials
///
/// Holds the username/password pair and the token last derived from them.
///
/// Changing the credentials does not touch the token. Call
/// [`Credentials::derive_token`] (or `OnetClient::set_token`) afterwards to
/// pick up the new values.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    username: String,
    password: String,
    token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            token: String::new(),
        }
    }

    pub fn set(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.username = username.into();
        self.password = password.into();
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Updates the stored token and returns it.
    ///
    /// A non-empty `explicit` token wins. Otherwise the token is encoded from
    /// the username and password when both are present. With neither, the
    /// previous token is kept as-is.
    pub fn derive_token(&mut self, explicit: Option<&str>) -> &str {
        match explicit {
            Some(token) if !token.is_empty() => {
                tracing::debug!("Using explicit token");
                self.token = token.to_string();
            }
            _ if self.has_credentials() => {
                tracing::debug!("Deriving token for user: {}", self.username);
                self.token = encode_basic(&self.username, &self.password);
            }
            _ => {
                tracing::warn!("No token or credentials available, keeping previous token");
            }
        }

        &self.token
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Basic {}", self.token)
    }

    /// First few characters of the token, safe to log.
    pub fn token_preview(&self) -> String {
        format!("{}...", self.token.chars().take(6).collect::<String>())
    }
}

pub fn encode_basic(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", username, password))
}

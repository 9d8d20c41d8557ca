//! Configuration for Xelon clients.
//!
//! [`ClientConfig`] is the serializable form of the options accepted by
//! [`crate::client::ClientBuilder`]. It can be loaded from any serde source
//! or from `XELON_*` environment variables.

use crate::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::Error;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use validator::Validate;

/// Environment variable holding the API base URL.
pub const ENV_BASE_URL: &str = "XELON_BASE_URL";
/// Environment variable holding the bearer token.
pub const ENV_TOKEN: &str = "XELON_TOKEN";
/// Environment variable holding the client (tenant) identifier.
pub const ENV_CLIENT_ID: &str = "XELON_CLIENT_ID";
/// Environment variable overriding the user agent.
pub const ENV_USER_AGENT: &str = "XELON_USER_AGENT";
/// Environment variable overriding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "XELON_TIMEOUT_SECS";

/// Connection settings for a Xelon client.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ClientConfig {
    /// API base URL; must end with `/`.
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent in the `Authorization` header.
    #[serde(skip_serializing, deserialize_with = "deserialize_token")]
    pub token: SecretString,

    /// Identifier sent in the client identification header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 600))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn deserialize_token<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl ClientConfig {
    /// Create a configuration with default settings and the given token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            token: SecretString::from(token.into()),
            client_id: None,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load the configuration from `XELON_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or a value is invalid.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let token = read(ENV_TOKEN)
            .ok_or_else(|| Error::Config(format!("{ENV_TOKEN} is not set")))?;
        let mut config = Self::new(token);

        if let Some(base_url) = read(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        config.client_id = read(ENV_CLIENT_ID);
        if let Some(user_agent) = read(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }
        if let Some(timeout) = read(ENV_TIMEOUT_SECS) {
            config.timeout_secs = timeout.trim().parse().map_err(|e| {
                Error::Config(format!("{ENV_TIMEOUT_SECS} must be a number of seconds: {e}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the client identifier.
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Override the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

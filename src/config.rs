//! Connection settings for a Dynatrace Server.
//!
//! Settings can be built in code or loaded from environment variables,
//! with validation to ensure all required values are present.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::SdkError;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for connecting to a Dynatrace Server.
///
/// The password is stored but never logged; the `Debug` output redacts it.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the server (e.g., `https://dynatrace.example.com:8021`).
    pub base_url: String,

    /// User for HTTP basic authentication.
    pub username: String,

    /// Password for HTTP basic authentication.
    /// This value must never be logged or included in error messages.
    pub password: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Whether self-signed or otherwise invalid server certificates are accepted.
    pub accept_invalid_certs: bool,
}

impl Config {
    /// Creates a configuration with the default timeout and certificate validation on.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Config` if the base URL has no http(s) scheme.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, SdkError> {
        Ok(Config {
            base_url: Self::validate_base_url(base_url.into())?,
            username: username.into(),
            password: password.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            accept_invalid_certs: false,
        })
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Accepts invalid server certificates (e.g. the server's default self-signed one).
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `DT_SERVER_URL`: The base URL of the server
    /// - `DT_USERNAME`: User for basic authentication
    /// - `DT_PASSWORD`: Password for basic authentication
    ///
    /// # Optional Environment Variables
    ///
    /// - `DT_TIMEOUT_MS`: Request timeout in milliseconds (default 30000)
    /// - `DT_ACCEPT_INVALID_CERTS`: `true` to skip certificate validation
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, SdkError> {
        let base_url = Self::get_required_env("DT_SERVER_URL")?;
        let username = Self::get_required_env("DT_USERNAME")?;
        let password = Self::get_required_env("DT_PASSWORD")?;

        let timeout = match env::var("DT_TIMEOUT_MS") {
            Ok(value) => Self::parse_timeout(&value)?,
            Err(_) => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };

        let accept_invalid_certs = match env::var("DT_ACCEPT_INVALID_CERTS") {
            Ok(value) => Self::parse_flag("DT_ACCEPT_INVALID_CERTS", &value)?,
            Err(_) => false,
        };

        Ok(Config::new(base_url, username, password)?
            .with_timeout(timeout)
            .with_accept_invalid_certs(accept_invalid_certs))
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, SdkError> {
        env::var(name)
            .map_err(|_| SdkError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(SdkError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(url: String) -> Result<String, SdkError> {
        let url = url.trim().trim_end_matches('/').to_string();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SdkError::invalid_config(
                "DT_SERVER_URL must start with http:// or https://",
            ));
        }

        Ok(url)
    }

    fn parse_timeout(value: &str) -> Result<Duration, SdkError> {
        value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| SdkError::invalid_config("DT_TIMEOUT_MS must be a whole number of milliseconds"))
    }

    fn parse_flag(name: &str, value: &str) -> Result<bool, SdkError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(SdkError::invalid_config(format!(
                "{} must be true or false",
                name
            ))),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

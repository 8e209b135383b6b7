//! Error types for the Dynatrace Server SDK.
//!
//! This module defines `SdkError`, the unified error type returned by every
//! service operation, and `DecodeError`, the failure produced by the XML
//! marshalling layer when a received body does not have the expected shape.
//!
//! # Classification
//!
//! - Local failures (`InvalidEndpoint`, `Serialization`, `Config`) happen before any network
//!   traffic and indicate a programming or setup mistake.
//! - Connection failures (`Connection`, `Timeout`) mean the round trip never
//!   completed.
//! - Response failures (`HttpStatus`, `Authentication`, `Decode`) mean the
//!   server answered, but not with something usable.
//!
//! Nothing in this crate retries; every error reaches the caller as-is.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// A received payload violated the expected wire shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DecodeError {
    message: String,
}

impl DecodeError {
    /// Creates a decode error with a free-form message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates a decode error for an enumeration token the SDK does not know.
    pub fn unknown_token(field: &str, token: &str) -> Self {
        Self::new(format!("unknown {} token {:?}", field, token))
    }

    /// Creates a decode error for a required element or attribute that is absent.
    pub fn missing(what: &str) -> Self {
        Self::new(format!("missing {}", what))
    }

    /// Returns the human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Unified error type for all SDK operations.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error - missing or invalid settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Arguments could not form a valid request target. Raised before any
    /// network call is attempted.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The transport could not complete the round trip (DNS, TCP, TLS).
    #[error("connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Request timed out.
    #[error("request timed out after {duration:?} ({operation})")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// A request model could not be written as XML.
    #[error("could not serialize request: {0}")]
    Serialization(String),

    /// Server answered with a status outside the success range.
    #[error("bad status: HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: StatusCode,
        /// The response body, truncated.
        body: String,
    },

    /// Server rejected the credentials (HTTP 401/403).
    #[error("authentication failed - check DT_USERNAME and DT_PASSWORD")]
    Authentication {
        /// The HTTP status code returned.
        status: StatusCode,
    },

    /// Server answered successfully but the body could not be decoded.
    #[error("bad body: HTTP {status}: {source}")]
    Decode {
        /// The HTTP status code of the response that failed to decode.
        status: StatusCode,
        /// What was wrong with the body.
        #[source]
        source: DecodeError,
    },
}

impl SdkError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        SdkError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SdkError::Config(message.into())
    }

    /// Creates an invalid endpoint error.
    pub fn invalid_endpoint(message: impl Into<String>) -> Self {
        SdkError::InvalidEndpoint(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        SdkError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Wraps a decode failure together with the status of the response it came from.
    pub fn decode(status: StatusCode, source: DecodeError) -> Self {
        SdkError::Decode { status, source }
    }

    /// Returns true if the server answered but the answer was unusable.
    ///
    /// Decode failures count as response errors.
    #[must_use]
    pub fn is_response_error(&self) -> bool {
        matches!(
            self,
            SdkError::HttpStatus { .. } | SdkError::Authentication { .. } | SdkError::Decode { .. }
        )
    }

    /// Returns true if the round trip never completed.
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(self, SdkError::Connection(_) | SdkError::Timeout { .. })
    }

    /// Returns the HTTP status carried by a response error.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SdkError::HttpStatus { status, .. }
            | SdkError::Authentication { status }
            | SdkError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

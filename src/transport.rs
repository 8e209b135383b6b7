//! HTTP transport used by the service façades.
//!
//! [`Transport`] is the capability set the SDK needs from an HTTP client:
//! GET, POST and PUT against a fully-resolved URL, each yielding status,
//! headers and body. [`HttpTransport`] implements it on top of `reqwest`
//! with basic authentication, a request timeout and optional acceptance of
//! self-signed certificates.
//!
//! # Security
//!
//! Credentials are never logged.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use url::Url;

use crate::config::Config;
use crate::error::SdkError;

/// Media type of every request and response body.
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Body text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with no headers.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Returns the first value of a header as text, if present and printable.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// The HTTP capabilities the service façades rely on.
///
/// Implementations perform exactly one round trip per call and must not
/// retry. Connection-level failures are reported as `SdkError::Connection`
/// or `SdkError::Timeout`; any status code is returned as a response.
pub trait Transport: Send + Sync {
    /// Performs a GET request.
    fn get(&self, url: Url) -> impl Future<Output = Result<HttpResponse, SdkError>> + Send;

    /// Performs a POST request with an XML body.
    fn post(
        &self,
        url: Url,
        body: String,
    ) -> impl Future<Output = Result<HttpResponse, SdkError>> + Send;

    /// Performs a PUT request with an XML body.
    fn put(
        &self,
        url: Url,
        body: String,
    ) -> impl Future<Output = Result<HttpResponse, SdkError>> + Send;
}

/// `reqwest`-backed transport.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    /// The underlying HTTP client.
    http: Client,

    /// User for basic authentication.
    username: String,

    /// Password for basic authentication.
    /// SECURITY: Never log this value!
    password: String,

    /// Timeout applied by `http`, kept for error reporting.
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, SdkError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(SdkError::HttpClient)?;

        Ok(Self {
            http,
            username: config.username.clone(),
            password: config.password.clone(),
            timeout: config.timeout,
        })
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<HttpResponse, SdkError> {
        let operation = format!("{} {}", method, url.path());

        tracing::debug!(
            method = %method,
            path = %url.path(),
            "Making management API request"
        );

        let mut req = self
            .http
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, XML_CONTENT_TYPE);

        if let Some(body) = body {
            tracing::trace!(body = %body, "Request body");
            req = req.header(CONTENT_TYPE, XML_CONTENT_TYPE).body(body);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                return SdkError::timeout(self.timeout, operation.clone());
            }
            SdkError::Connection(e)
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                return SdkError::timeout(self.timeout, operation.clone());
            }
            SdkError::Connection(e)
        })?;

        tracing::trace!(status = %status, body = %body, "Management API response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<HttpResponse, SdkError> {
        self.send(Method::GET, url, None).await
    }

    async fn post(&self, url: Url, body: String) -> Result<HttpResponse, SdkError> {
        self.send(Method::POST, url, Some(body)).await
    }

    async fn put(&self, url: Url, body: String) -> Result<HttpResponse, SdkError> {
        self.send(Method::PUT, url, Some(body)).await
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording transport for façade unit tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// A request seen by [`MockTransport`].
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedCall {
        pub method: Method,
        pub url: Url,
        pub body: Option<String>,
    }

    /// Replays queued responses in order and records every call.
    #[derive(Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<HttpResponse>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, response: HttpResponse) -> Self {
            self.responses.lock().unwrap().push_back(response);
            self
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, method: Method, url: Url, body: Option<String>) -> HttpResponse {
            self.calls
                .lock()
                .unwrap()
                .push(RecordedCall { method, url, body });
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected request: no response queued")
        }
    }

    impl Transport for MockTransport {
        async fn get(&self, url: Url) -> Result<HttpResponse, SdkError> {
            Ok(self.record(Method::GET, url, None))
        }

        async fn post(&self, url: Url, body: String) -> Result<HttpResponse, SdkError> {
            Ok(self.record(Method::POST, url, Some(body)))
        }

        async fn put(&self, url: Url, body: String) -> Result<HttpResponse, SdkError> {
            Ok(self.record(Method::PUT, url, Some(body)))
        }
    }
}

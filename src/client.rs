//! Client for a Dynatrace Server's management REST API.
//!
//! `DynatraceClient` owns the server base URL and a [`Transport`]. The
//! resource families are reached through borrowed façades:
//! [`incidents`](DynatraceClient::incidents),
//! [`system_profiles`](DynatraceClient::system_profiles) and
//! [`memory_dumps`](DynatraceClient::memory_dumps).
//!
//! Every operation performs exactly one round trip. Non-success statuses and
//! undecodable bodies become typed errors; nothing is retried.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::endpoint;
use crate::error::SdkError;
use crate::services::{Incidents, MemoryDumps, SystemProfiles};
use crate::transport::{HttpResponse, HttpTransport, Transport};
use crate::xml::{self, XmlEntity};

/// Maximum length for HTTP error response bodies kept in errors.
const MAX_ERROR_BODY_LEN: usize = 500;

/// Client for the management REST API.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = DynatraceClient::new(&config)?;
///
/// let profiles = client.system_profiles().list_profiles().await?;
/// ```
#[derive(Clone)]
pub struct DynatraceClient<T = HttpTransport> {
    /// Transport performing the HTTP calls.
    transport: T,

    /// Server base URL without trailing slash (e.g., `https://dynatrace.example.com:8021`).
    base_url: String,
}

impl DynatraceClient<HttpTransport> {
    /// Creates a client backed by `reqwest` from configuration.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, SdkError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(&config.base_url, transport))
    }
}

impl<T: Transport> DynatraceClient<T> {
    /// Creates a client over any transport.
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    /// Returns the server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Incident operations.
    pub fn incidents(&self) -> Incidents<'_, T> {
        Incidents::new(self)
    }

    /// System profile operations.
    pub fn system_profiles(&self) -> SystemProfiles<'_, T> {
        SystemProfiles::new(self)
    }

    /// Memory dump job operations.
    pub fn memory_dumps(&self) -> MemoryDumps<'_, T> {
        MemoryDumps::new(self)
    }

    /// Tests connectivity and credentials by listing system profiles.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying call.
    pub async fn test_connection(&self) -> Result<(), SdkError> {
        tracing::debug!("Testing connection to Dynatrace Server");

        match self.system_profiles().list_profiles().await {
            Ok(profiles) => {
                tracing::info!(
                    profiles = profiles.profiles.len(),
                    "Connection test successful"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Connection test failed");
                Err(e)
            }
        }
    }

    /// Resolves an endpoint template against the base URL.
    pub(crate) fn endpoint(
        &self,
        template: &str,
        args: &[&str],
        query: &[(&str, Option<String>)],
    ) -> Result<Url, SdkError> {
        endpoint::resolve(&self.base_url, template, args, query)
    }

    /// GETs a document and decodes it into `R`.
    pub(crate) async fn get_entity<R>(&self, url: Url) -> Result<R, SdkError>
    where
        R: DeserializeOwned + XmlEntity,
    {
        let response = self.transport.get(url).await?;
        let response = Self::check_status(response)?;
        xml::decode(&response.body).map_err(|e| SdkError::decode(response.status, e))
    }

    /// GETs a single-value result document and extracts its boolean.
    pub(crate) async fn get_result_value(&self, url: Url) -> Result<bool, SdkError> {
        let response = self.transport.get(url).await?;
        let response = Self::check_status(response)?;
        xml::extract_result_value(&response.body).map_err(|e| SdkError::decode(response.status, e))
    }

    /// POSTs an encoded model and returns the successful response.
    pub(crate) async fn post_entity<B>(&self, url: Url, body: &B) -> Result<HttpResponse, SdkError>
    where
        B: Serialize + XmlEntity,
    {
        let payload = xml::encode(body)?;
        let response = self.transport.post(url, payload).await?;
        Self::check_status(response)
    }

    /// PUTs an encoded model and returns the successful response.
    pub(crate) async fn put_entity<B>(&self, url: Url, body: &B) -> Result<HttpResponse, SdkError>
    where
        B: Serialize + XmlEntity,
    {
        let payload = xml::encode(body)?;
        let response = self.transport.put(url, payload).await?;
        Self::check_status(response)
    }

    /// Passes 2xx responses through and converts everything else into an error.
    fn check_status(response: HttpResponse) -> Result<HttpResponse, SdkError> {
        let status = response.status;
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!(status = %status, "Dynatrace Server rejected credentials");
                Err(SdkError::Authentication { status })
            }
            _ => {
                let body = if response.body.chars().count() > MAX_ERROR_BODY_LEN {
                    let head: String = response.body.chars().take(MAX_ERROR_BODY_LEN).collect();
                    format!("{}...[truncated]", head)
                } else {
                    response.body
                };
                Err(SdkError::HttpStatus { status, body })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[test]
    fn test_with_transport_trims_base_url() {
        let client = DynatraceClient::with_transport("http://localhost:8020/", MockTransport::new());
        assert_eq!(client.base_url(), "http://localhost:8020");
    }

    #[test]
    fn test_check_status_passes_success() {
        let response = HttpResponse::new(StatusCode::CREATED, "");
        assert!(DynatraceClient::<MockTransport>::check_status(response).is_ok());
    }

    #[test]
    fn test_check_status_maps_auth_failures() {
        let err = DynatraceClient::<MockTransport>::check_status(HttpResponse::new(
            StatusCode::UNAUTHORIZED,
            "",
        ))
        .unwrap_err();
        assert!(matches!(err, SdkError::Authentication { .. }));
    }

    #[test]
    fn test_check_status_truncates_body() {
        let body = "x".repeat(MAX_ERROR_BODY_LEN + 10);
        let err = DynatraceClient::<MockTransport>::check_status(HttpResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            body,
        ))
        .unwrap_err();
        match err {
            SdkError::HttpStatus { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(body.ends_with("...[truncated]"));
                assert_eq!(body.len(), MAX_ERROR_BODY_LEN + "...[truncated]".len());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_failure_carries_status() {
        let client = DynatraceClient::with_transport(
            "http://localhost:8020",
            MockTransport::new().respond(HttpResponse::new(StatusCode::OK, "<notprofiles/>")),
        );
        let url = client.endpoint(endpoint::PROFILES_EP, &[], &[]).unwrap();
        let err = tokio_test::block_on(client.get_entity::<crate::models::Profiles>(url))
            .unwrap_err();
        assert!(matches!(err, SdkError::Decode { status: StatusCode::OK, .. }));
    }
}

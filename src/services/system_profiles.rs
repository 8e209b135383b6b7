//! System Profiles REST API.
//!
//! Enabling, disabling and activating are remote side effects; the server
//! reports their outcome in a single-value `<result value="..."/>` document.

use crate::client::DynatraceClient;
use crate::endpoint::{
    ACTIVATE_PROFILE_CONFIGURATION_EP, PROFILES_EP, PROFILE_DISABLE_EP, PROFILE_ENABLE_EP,
    PROFILE_EP,
};
use crate::error::SdkError;
use crate::models::{Profiles, SystemProfileMetadata};
use crate::transport::Transport;

/// System profile operations of a [`DynatraceClient`].
pub struct SystemProfiles<'a, T> {
    client: &'a DynatraceClient<T>,
}

impl<'a, T: Transport> SystemProfiles<'a, T> {
    pub(crate) fn new(client: &'a DynatraceClient<T>) -> Self {
        Self { client }
    }

    /// Lists all system profiles of the server.
    pub async fn list_profiles(&self) -> Result<Profiles, SdkError> {
        let url = self.client.endpoint(PROFILES_EP, &[], &[])?;
        self.client.get_entity(url).await
    }

    /// Gets the details of one system profile.
    pub async fn get_profile_metadata(
        &self,
        profile_name: &str,
    ) -> Result<SystemProfileMetadata, SdkError> {
        let url = self.client.endpoint(PROFILE_EP, &[profile_name], &[])?;
        self.client.get_entity(url).await
    }

    /// Activates a configuration of a profile; all others become inactive.
    ///
    /// # Returns
    ///
    /// Whether the server reports the activation as executed.
    pub async fn activate_profile_configuration(
        &self,
        profile_name: &str,
        configuration_name: &str,
    ) -> Result<bool, SdkError> {
        let url = self.client.endpoint(
            ACTIVATE_PROFILE_CONFIGURATION_EP,
            &[profile_name, configuration_name],
            &[],
        )?;
        let activated = self.client.get_result_value(url).await?;

        tracing::debug!(
            profile = %profile_name,
            configuration = %configuration_name,
            activated,
            "Activated profile configuration"
        );

        Ok(activated)
    }

    /// Enables a system profile.
    pub async fn enable_profile(&self, profile_name: &str) -> Result<bool, SdkError> {
        let url = self.client.endpoint(PROFILE_ENABLE_EP, &[profile_name], &[])?;
        self.client.get_result_value(url).await
    }

    /// Disables a system profile.
    pub async fn disable_profile(&self, profile_name: &str) -> Result<bool, SdkError> {
        let url = self.client.endpoint(PROFILE_DISABLE_EP, &[profile_name], &[])?;
        self.client.get_result_value(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use crate::transport::HttpResponse;
    use reqwest::StatusCode;
    use tokio_test::block_on;

    fn client_returning(body: &str) -> DynatraceClient<MockTransport> {
        DynatraceClient::with_transport(
            "http://localhost:8020",
            MockTransport::new().respond(HttpResponse::new(StatusCode::OK, body)),
        )
    }

    #[test]
    fn test_enable_profile_true() {
        let client = client_returning("<result value=\"true\"/>");
        assert!(block_on(client.system_profiles().enable_profile("easyTravel")).unwrap());
        assert_eq!(
            client.transport().calls()[0].url.path(),
            "/rest/management/profiles/easyTravel/enable"
        );
    }

    #[test]
    fn test_disable_profile_false() {
        let client = client_returning("<result value=\"false\"/>");
        assert!(!block_on(client.system_profiles().disable_profile("easyTravel")).unwrap());
        assert_eq!(
            client.transport().calls()[0].url.path(),
            "/rest/management/profiles/easyTravel/disable"
        );
    }

    #[test]
    fn test_activate_configuration_encodes_names() {
        let client = client_returning("<result value=\"true\"/>");
        assert!(block_on(
            client
                .system_profiles()
                .activate_profile_configuration("easy Travel", "Default")
        )
        .unwrap());
        assert_eq!(
            client.transport().calls()[0].url.path(),
            "/rest/management/profiles/easy%20Travel/configurations/Default/activate"
        );
    }

    #[test]
    fn test_unexpected_result_text_is_decode_error() {
        let client = client_returning("<result value=\"True\"/>");
        let err = block_on(client.system_profiles().enable_profile("easyTravel")).unwrap_err();
        assert!(matches!(err, SdkError::Decode { .. }));
    }

    #[test]
    fn test_empty_profile_name_rejected_without_network() {
        let client = DynatraceClient::with_transport("http://localhost:8020", MockTransport::new());
        let profiles = client.system_profiles();
        assert!(matches!(
            block_on(profiles.enable_profile("")).unwrap_err(),
            SdkError::InvalidEndpoint(_)
        ));
        assert!(matches!(
            block_on(profiles.disable_profile(" ")).unwrap_err(),
            SdkError::InvalidEndpoint(_)
        ));
        assert!(matches!(
            block_on(profiles.activate_profile_configuration("easyTravel", "")).unwrap_err(),
            SdkError::InvalidEndpoint(_)
        ));
        assert!(matches!(
            block_on(profiles.get_profile_metadata("")).unwrap_err(),
            SdkError::InvalidEndpoint(_)
        ));
        assert!(matches!(
            block_on(profiles.enable_profile("..")).unwrap_err(),
            SdkError::InvalidEndpoint(_)
        ));
        assert!(matches!(
            block_on(profiles.activate_profile_configuration("easyTravel", "..")).unwrap_err(),
            SdkError::InvalidEndpoint(_)
        ));
        assert!(client.transport().calls().is_empty());
    }

    #[test]
    fn test_list_profiles() {
        let client = client_returning(
            "<profiles><systemprofile id=\"a\" isrecording=\"false\"/><systemprofile id=\"b\"/></profiles>",
        );
        let profiles = block_on(client.system_profiles().list_profiles()).unwrap();
        let ids: Vec<&str> = profiles.profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}

//! Incidents REST API.

use crate::client::DynatraceClient;
use crate::endpoint::{format_date, INCIDENTS_EP, INCIDENT_EP};
use crate::error::{DecodeError, SdkError};
use crate::models::{CreateUpdateIncidentRequest, FetchIncidentsRequest, FetchedIncidents, Incident};
use crate::transport::Transport;

const LOCATION_HEADER: &str = "Location";
const PARAM_TO: &str = "to";
const PARAM_FROM: &str = "from";
const PARAM_STATE: &str = "state";

/// Incident operations of a [`DynatraceClient`].
pub struct Incidents<'a, T> {
    client: &'a DynatraceClient<T>,
}

impl<'a, T: Transport> Incidents<'a, T> {
    pub(crate) fn new(client: &'a DynatraceClient<T>) -> Self {
        Self { client }
    }

    /// Lists incident references matching the filter.
    ///
    /// # Returns
    ///
    /// Incident ids and links, in the order the server sent them.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let request = FetchIncidentsRequest::new("easyTravel", "Deployment")
    ///     .with_state(IncidentState::Created);
    /// let fetched = client.incidents().fetch_incidents(&request).await?;
    /// ```
    pub async fn fetch_incidents(
        &self,
        request: &FetchIncidentsRequest,
    ) -> Result<FetchedIncidents, SdkError> {
        let query = [
            (PARAM_TO, request.to.as_ref().map(format_date)),
            (PARAM_FROM, request.from.as_ref().map(format_date)),
            (PARAM_STATE, request.state.map(|s| s.as_str().to_string())),
        ];
        let url = self.client.endpoint(
            INCIDENTS_EP,
            &[request.system_profile.as_str(), request.incident_rule.as_str()],
            &query,
        )?;

        self.client.get_entity(url).await
    }

    /// Gets a single incident.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::InvalidEndpoint` without contacting the server if
    /// any identifier is empty.
    pub async fn get_incident(
        &self,
        system_profile: &str,
        rule: &str,
        id: &str,
    ) -> Result<Incident, SdkError> {
        let url = self
            .client
            .endpoint(INCIDENT_EP, &[system_profile, rule, id], &[])?;

        self.client.get_entity(url).await
    }

    /// Creates an incident and returns the id the server assigned.
    ///
    /// The id is the last path segment of the `Location` header.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Decode` if the response has no usable `Location`.
    pub async fn create_incident(
        &self,
        request: &CreateUpdateIncidentRequest,
    ) -> Result<String, SdkError> {
        let url = self.client.endpoint(
            INCIDENTS_EP,
            &[request.system_profile.as_str(), request.incident_rule.as_str()],
            &[],
        )?;

        let response = self.client.post_entity(url, request).await?;

        let location = response.header(LOCATION_HEADER).ok_or_else(|| {
            SdkError::decode(response.status, DecodeError::missing("Location header"))
        })?;
        let id = id_from_location(location).ok_or_else(|| {
            SdkError::decode(
                response.status,
                DecodeError::new(format!("no incident id in Location {:?}", location)),
            )
        })?;

        tracing::debug!(
            incident_id = %id,
            profile = %request.system_profile,
            rule = %request.incident_rule,
            "Created incident"
        );

        Ok(id.to_string())
    }

    /// Replaces the fields of an existing incident.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::InvalidEndpoint` without contacting the server if
    /// the id or a routing field is empty.
    pub async fn update_incident(
        &self,
        id: &str,
        request: &CreateUpdateIncidentRequest,
    ) -> Result<(), SdkError> {
        let url = self.client.endpoint(
            INCIDENT_EP,
            &[request.system_profile.as_str(), request.incident_rule.as_str(), id],
            &[],
        )?;

        self.client.put_entity(url, request).await?;
        Ok(())
    }
}

/// Returns the last path segment of a `Location` value, if it is not empty.
///
/// Query string and fragment are ignored; relative values are accepted.
fn id_from_location(location: &str) -> Option<&str> {
    let location = location.trim();
    let path = location.split(['?', '#']).next().unwrap_or(location);
    path.rsplit('/').next().filter(|segment| !segment.is_empty())
}

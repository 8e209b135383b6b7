//! Incident models for the management API.
//!
//! Incidents are filed under an incident rule of a system profile. The
//! server assigns each incident an id; the SDK reads, creates and updates
//! them but never deletes them.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{optional_date, wire_enum};
use crate::xml::XmlEntity;

wire_enum! {
    /// Severity of an incident.
    IncidentSeverity, field = "severity" {
        /// Informational only.
        Informational => "informational",
        /// Something needs attention.
        Warning => "warning",
        /// Something failed.
        Error => "error",
        /// Availability is affected.
        Availability => "availability",
    }
}

wire_enum! {
    /// Lifecycle state of an incident.
    IncidentState, field = "state" {
        /// Newly created.
        Created => "Created",
        /// Open and ongoing.
        Open => "Open",
        /// Being worked on.
        InProgress => "InProgress",
        /// Confirmed by a user.
        Confirmed => "Confirmed",
        /// Closed.
        Closed => "Closed",
    }
}

/// A fully-populated incident as returned by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Incident {
    /// Server-assigned incident id.
    #[serde(rename = "@id")]
    pub id: String,

    /// Short message.
    #[serde(default)]
    pub message: Option<String>,

    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,

    /// Start of the incident window.
    #[serde(default, with = "optional_date")]
    pub start: Option<DateTime<FixedOffset>>,

    /// End of the incident window.
    #[serde(default, with = "optional_date")]
    pub end: Option<DateTime<FixedOffset>>,

    /// Lifecycle state.
    #[serde(default)]
    pub state: Option<IncidentState>,

    /// Severity.
    #[serde(default)]
    pub severity: Option<IncidentSeverity>,
}

impl XmlEntity for Incident {
    const ROOT: &'static str = "incident";
}

/// Body of a create or update call.
///
/// The system profile and incident rule only select the endpoint; they are
/// never written into the XML payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CreateUpdateIncidentRequest {
    /// Short message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Severity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<IncidentSeverity>,

    /// Start of the incident window.
    #[serde(skip_serializing_if = "Option::is_none", with = "optional_date")]
    pub start: Option<DateTime<FixedOffset>>,

    /// End of the incident window.
    #[serde(skip_serializing_if = "Option::is_none", with = "optional_date")]
    pub end: Option<DateTime<FixedOffset>>,

    /// System profile the incident belongs to.
    #[serde(skip)]
    pub system_profile: String,

    /// Incident rule the incident is filed under.
    #[serde(skip)]
    pub incident_rule: String,
}

impl CreateUpdateIncidentRequest {
    /// Creates an empty request routed to the given profile and rule.
    pub fn new(system_profile: impl Into<String>, incident_rule: impl Into<String>) -> Self {
        Self {
            system_profile: system_profile.into(),
            incident_rule: incident_rule.into(),
            ..Default::default()
        }
    }

    /// Sets the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the severity.
    pub fn with_severity(mut self, severity: IncidentSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Sets the start of the incident window.
    pub fn with_start(mut self, start: DateTime<FixedOffset>) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the end of the incident window.
    pub fn with_end(mut self, end: DateTime<FixedOffset>) -> Self {
        self.end = Some(end);
        self
    }
}

impl XmlEntity for CreateUpdateIncidentRequest {
    const ROOT: &'static str = "incident";
}

/// Filter for listing incidents. Unset filters are left out of the query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchIncidentsRequest {
    /// System profile to list incidents from.
    pub system_profile: String,

    /// Incident rule to list incidents from.
    pub incident_rule: String,

    /// Lower bound of the time window.
    pub from: Option<DateTime<FixedOffset>>,

    /// Upper bound of the time window.
    pub to: Option<DateTime<FixedOffset>>,

    /// Only incidents in this state.
    pub state: Option<IncidentState>,
}

impl FetchIncidentsRequest {
    /// Creates an unfiltered request for the given profile and rule.
    pub fn new(system_profile: impl Into<String>, incident_rule: impl Into<String>) -> Self {
        Self {
            system_profile: system_profile.into(),
            incident_rule: incident_rule.into(),
            ..Default::default()
        }
    }

    /// Sets the lower bound of the time window.
    pub fn with_from(mut self, from: DateTime<FixedOffset>) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the upper bound of the time window.
    pub fn with_to(mut self, to: DateTime<FixedOffset>) -> Self {
        self.to = Some(to);
        self
    }

    /// Filters by state.
    pub fn with_state(mut self, state: IncidentState) -> Self {
        self.state = Some(state);
        self
    }
}

/// Lightweight reference returned by a listing call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FetchedIncident {
    /// Incident id.
    #[serde(rename = "@id")]
    pub id: String,

    /// Absolute link to the incident resource.
    #[serde(rename = "@href", default)]
    pub href: Option<String>,
}

/// Incident references in server order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FetchedIncidents {
    /// The references, as received.
    #[serde(rename = "incidentreference", default)]
    pub incidents: Vec<FetchedIncident>,
}

impl XmlEntity for FetchedIncidents {
    const ROOT: &'static str = "incidents";
}

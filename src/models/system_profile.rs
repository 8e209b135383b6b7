//! System profile models.

use serde::Deserialize;

use crate::xml::XmlEntity;

/// A system profile as listed by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemProfile {
    /// Profile name, which doubles as its id.
    #[serde(rename = "@id")]
    pub id: String,

    /// Absolute link to the profile resource.
    #[serde(rename = "@href", default)]
    pub href: Option<String>,

    /// Whether session recording is running.
    #[serde(rename = "@isrecording", default)]
    pub is_recording: Option<bool>,
}

/// All system profiles of a server, in server order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Profiles {
    /// The profiles.
    #[serde(rename = "systemprofile", default)]
    pub profiles: Vec<SystemProfile>,
}

impl Profiles {
    /// Returns the profile with the given id, if listed.
    pub fn find(&self, id: &str) -> Option<&SystemProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }
}

impl XmlEntity for Profiles {
    const ROOT: &'static str = "profiles";
}

/// Link to the agent groups of a profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentGroupsReference {
    /// Absolute link to the agent groups resource.
    #[serde(rename = "@href", default)]
    pub href: Option<String>,
}

/// Detailed view of a single system profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemProfileMetadata {
    /// Profile name, which doubles as its id.
    #[serde(rename = "@id")]
    pub id: String,

    /// Absolute link to the profile resource.
    #[serde(rename = "@href", default)]
    pub href: Option<String>,

    /// Whether session recording is running.
    #[serde(rename = "@isrecording", default)]
    pub is_recording: Option<bool>,

    /// Whether the profile is enabled.
    #[serde(rename = "@enabled", default)]
    pub enabled: Option<bool>,

    /// Whether the profile runs with an interactive license.
    #[serde(rename = "@isInteractiveLicensed", default)]
    pub is_interactive_licensed: Option<bool>,

    /// Link to the profile's agent groups.
    #[serde(rename = "agentgroupsreference", default)]
    pub agent_groups_reference: Option<AgentGroupsReference>,

    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl XmlEntity for SystemProfileMetadata {
    const ROOT: &'static str = "systemprofile";
}

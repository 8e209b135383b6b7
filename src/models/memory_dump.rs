//! Memory dump job models.
//!
//! Memory dump jobs are owned by the server; the SDK only reads them.

use serde::Deserialize;

use super::common::wire_enum;
use crate::xml::XmlEntity;

wire_enum! {
    /// Progress state of a memory dump job.
    JobState, field = "state" {
        /// Queued, not started.
        Waiting => "Waiting",
        /// Capturing.
        Running => "Running",
        /// Dump written.
        Finished => "Finished",
        /// Capture failed.
        Failed => "Failed",
        /// Canceled before finishing.
        Canceled => "Canceled",
    }
}

/// A numeric measurement carried in a `value` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct JobValue {
    /// The measurement.
    #[serde(rename = "@value")]
    pub value: i64,
}

/// The agent a memory dump job targets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AgentPattern {
    /// Agent name.
    #[serde(rename = "agentname", default)]
    pub agent_name: Option<String>,

    /// Host the agent runs on.
    #[serde(rename = "hostname", default)]
    pub host_name: Option<String>,

    /// Process id of the monitored process.
    #[serde(rename = "processid", default)]
    pub process_id: Option<u32>,
}

/// Link to the session holding the dump.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionReference {
    /// Session id.
    #[serde(rename = "@id")]
    pub id: String,

    /// Absolute link to the session resource.
    #[serde(rename = "@href", default)]
    pub href: Option<String>,
}

/// A memory dump job snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemoryDumpJob {
    /// Job id.
    #[serde(rename = "@id")]
    pub id: String,

    /// Current state.
    #[serde(default)]
    pub state: Option<JobState>,

    /// Whether the dump was post-processed.
    #[serde(rename = "ispostprocessed", default)]
    pub is_post_processed: Option<bool>,

    /// Whether the session is locked against deletion.
    #[serde(rename = "issessionlocked", default)]
    pub is_session_locked: Option<bool>,

    /// Whether primitive values are captured.
    #[serde(rename = "iscaptureprimitives", default)]
    pub is_capture_primitives: Option<bool>,

    /// Whether string values are captured.
    #[serde(rename = "iscapturestrings", default)]
    pub is_capture_strings: Option<bool>,

    /// Whether a garbage collection runs before capture.
    #[serde(rename = "isdogc", default)]
    pub is_do_gc: Option<bool>,

    /// Progress in percent.
    #[serde(default)]
    pub progress: Option<JobValue>,

    /// Duration in milliseconds.
    #[serde(default)]
    pub duration: Option<JobValue>,

    /// Targeted agent.
    #[serde(rename = "agentpattern", default)]
    pub agent_pattern: Option<AgentPattern>,

    /// Session the dump is stored in.
    #[serde(rename = "sessionreference", default)]
    pub session_reference: Option<SessionReference>,
}

impl MemoryDumpJob {
    /// Returns true once the job will not change any more.
    pub fn is_done(&self) -> bool {
        matches!(
            self.state,
            Some(JobState::Finished | JobState::Failed | JobState::Canceled)
        )
    }
}

impl XmlEntity for MemoryDumpJob {
    const ROOT: &'static str = "memorydumpjob";
}

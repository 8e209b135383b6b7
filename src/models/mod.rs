//! Data models for the management API.
//!
//! This module contains the request and response types for incidents,
//! system profiles and memory dump jobs, plus the shared enumeration and
//! timestamp helpers their XML mappings rely on.

mod common;
mod incident;
mod memory_dump;
mod system_profile;

pub use incident::*;
pub use memory_dump::*;
pub use system_profile::*;

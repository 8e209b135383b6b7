//! Service façades, one per resource family.
//!
//! Each façade borrows a [`DynatraceClient`](crate::client::DynatraceClient)
//! and turns domain operations into one resolved endpoint, one transport
//! call and one decoded result.

mod incidents;
mod memory_dumps;
mod system_profiles;

pub use incidents::Incidents;
pub use memory_dumps::MemoryDumps;
pub use system_profiles::SystemProfiles;

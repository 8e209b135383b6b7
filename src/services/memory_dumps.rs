//! Memory Dumps REST API. Read-only.

use crate::client::DynatraceClient;
use crate::endpoint::MEMORY_DUMP_JOB_EP;
use crate::error::SdkError;
use crate::models::MemoryDumpJob;
use crate::transport::Transport;

/// Memory dump job operations of a [`DynatraceClient`].
pub struct MemoryDumps<'a, T> {
    client: &'a DynatraceClient<T>,
}

impl<'a, T: Transport> MemoryDumps<'a, T> {
    pub(crate) fn new(client: &'a DynatraceClient<T>) -> Self {
        Self { client }
    }

    /// Gets the current snapshot of a memory dump job.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::InvalidEndpoint` without contacting the server if
    /// the profile or job id is empty.
    pub async fn get_memory_dump_job(
        &self,
        profile_name: &str,
        job_id: &str,
    ) -> Result<MemoryDumpJob, SdkError> {
        let url = self
            .client
            .endpoint(MEMORY_DUMP_JOB_EP, &[profile_name, job_id], &[])?;
        self.client.get_entity(url).await
    }
}

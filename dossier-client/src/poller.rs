//! Ingest job poller
//!
//! Waits for an asynchronous ingest job to reach a terminal state by
//! re-checking its status at a fixed interval. Chunking and embedding run
//! server-side; all this loop does is observe.

use async_trait::async_trait;
use dossier_core::domain::ingest::{IngestJob, IngestStatus};
use thiserror::Error;
use tokio::time::{self, Duration, Instant};
use tracing::debug;

use crate::DossierClient;
use crate::error::ClientError;

/// Status source the poller re-checks
///
/// Abstracted behind a trait so the wait loop can be exercised without a
/// live service.
#[async_trait]
pub trait IngestProbe {
    /// Fetch the current state of the ingest job
    async fn check(&self) -> Result<IngestJob, ClientError>;
}

/// Probe backed by the ingest endpoints of a [`DossierClient`]
pub struct RemoteIngestProbe<'a> {
    client: &'a DossierClient,
    vector_store_id: &'a str,
    file_id: &'a str,
}

impl<'a> RemoteIngestProbe<'a> {
    pub fn new(client: &'a DossierClient, vector_store_id: &'a str, file_id: &'a str) -> Self {
        Self {
            client,
            vector_store_id,
            file_id,
        }
    }
}

#[async_trait]
impl IngestProbe for RemoteIngestProbe<'_> {
    async fn check(&self) -> Result<IngestJob, ClientError> {
        self.client
            .get_ingest_job(self.vector_store_id, self.file_id)
            .await
    }
}

/// How often to re-check and how long to keep trying
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Delay between consecutive status checks
    pub interval: Duration,
    /// Overall bound on the wait; `None` polls until a terminal state
    pub timeout: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            timeout: None,
        }
    }
}

impl PollPolicy {
    /// Policy with an overall bound on the wait
    pub fn bounded(interval: Duration, timeout: Duration) -> Self {
        Self {
            interval,
            timeout: Some(timeout),
        }
    }
}

/// Errors that can end a poll early
#[derive(Debug, Error)]
pub enum PollError {
    /// Terminal failure reported by the service
    #[error("ingest job failed: {detail}")]
    JobFailed { detail: String },

    /// Job was cancelled before completing
    #[error("ingest job was cancelled")]
    Cancelled,

    /// Bounded wait ran out before a terminal state
    #[error("ingest job still not terminal after {waited:?}")]
    TimedOut { waited: Duration },

    /// A status check failed
    #[error(transparent)]
    Probe(#[from] ClientError),
}

/// Waits for ingest jobs to reach a terminal state
pub struct IngestPoller {
    policy: PollPolicy,
}

impl IngestPoller {
    /// Creates a poller with the given policy
    pub fn new(policy: PollPolicy) -> Self {
        Self { policy }
    }

    /// Re-check the job until it completes, fails, or runs out of time
    ///
    /// A job already terminal on the first check returns without any delay.
    /// With a bounded policy the poller gives up once the next sleep would
    /// overrun the limit, rather than sleeping past it.
    pub async fn wait_until_terminal(&self, probe: &dyn IngestProbe) -> Result<IngestJob, PollError> {
        let started = Instant::now();

        loop {
            let job = probe.check().await?;

            match job.status {
                IngestStatus::Completed => return Ok(job),
                IngestStatus::Failed => {
                    let detail = job
                        .last_error
                        .as_ref()
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "no error detail provided".to_string());
                    return Err(PollError::JobFailed { detail });
                }
                IngestStatus::Cancelled => return Err(PollError::Cancelled),
                IngestStatus::Pending | IngestStatus::InProgress => {}
            }

            if let Some(limit) = self.policy.timeout {
                let waited = started.elapsed();
                if waited + self.policy.interval > limit {
                    return Err(PollError::TimedOut { waited });
                }
            }

            debug!(job_id = %job.id, status = ?job.status, "ingest job not terminal yet");
            time::sleep(self.policy.interval).await;
        }
    }
}

//! The job store port consumed by the board controller.
//!
//! Carried as `Arc<dyn JobStore>` so backends swap without touching the
//! controller: `HttpJobStore` in production, a scripted in-memory store in
//! tests.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use model::{Job, JobDraft, Status};

/// Failures a store call can surface. Mirrors the service's error
/// responses plus transport-level failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("job not found")]
    NotFound,

    #[error("validation rejected: {0}")]
    Validation(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("unexpected response (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Asynchronous, side-effecting operations against the source of truth.
/// Every call may fail or time out; callers decide how local state reacts.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<Job>, StoreError>;
    async fn create_job(&self, draft: &JobDraft) -> Result<Job, StoreError>;
    async fn update_status(&self, id: Uuid, status: Status) -> Result<Job, StoreError>;
    async fn delete_job(&self, id: Uuid) -> Result<(), StoreError>;
}

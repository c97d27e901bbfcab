//! HTTP job store — the single point of entry for all backend calls from
//! the board. Wraps the REST surface with a fixed request timeout and maps
//! response statuses onto `StoreError`.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;
use uuid::Uuid;

use model::{DeleteConfirmation, ErrorBody, Job, JobDraft, Status, StatusPatch};

use crate::store::{JobStore, StoreError};

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Clone)]
pub struct HttpJobStore {
    client: Client,
    base_url: String,
}

impl HttpJobStore {
    /// Builds a store client against `base_url` (e.g. `http://localhost:5000`).
    ///
    /// # Errors
    ///
    /// Returns a network error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Maps a non-2xx response to the matching `StoreError` variant,
    /// pulling the message out of the `{"error": ...}` body when present.
    async fn error_for(response: Response) -> StoreError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_default();

        match status {
            StatusCode::NOT_FOUND => StoreError::NotFound,
            StatusCode::BAD_REQUEST => StoreError::Validation(message),
            s if s.is_server_error() => StoreError::Unavailable(message),
            s => StoreError::Api {
                status: s.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl JobStore for HttpJobStore {
    async fn list_jobs(&self) -> Result<Vec<Job>, StoreError> {
        let response = self.client.get(self.url("/jobs")).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let jobs: Vec<Job> = response.json().await?;
        debug!("Loaded {} jobs", jobs.len());
        Ok(jobs)
    }

    async fn create_job(&self, draft: &JobDraft) -> Result<Job, StoreError> {
        let response = self
            .client
            .post(self.url("/jobs"))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let job: Job = response.json().await?;
        debug!("Created job {}", job.id);
        Ok(job)
    }

    async fn update_status(&self, id: Uuid, status: Status) -> Result<Job, StoreError> {
        let response = self
            .client
            .patch(self.url(&format!("/jobs/{id}")))
            .json(&StatusPatch { status })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let job: Job = response.json().await?;
        debug!("Job {} now {}", job.id, job.status);
        Ok(job)
    }

    async fn delete_job(&self, id: Uuid) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.url(&format!("/jobs/{id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let confirmation: DeleteConfirmation = response.json().await?;
        debug!("{}", confirmation.message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let store = HttpJobStore::new("http://localhost:5000/").unwrap();
        assert_eq!(store.url("/jobs"), "http://localhost:5000/jobs");
    }

    #[test]
    fn test_url_joins_id_paths() {
        let store = HttpJobStore::new("http://localhost:5000").unwrap();
        let id = Uuid::new_v4();
        assert_eq!(
            store.url(&format!("/jobs/{id}")),
            format!("http://localhost:5000/jobs/{id}")
        );
    }
}

//! Board controller — the client-side cache of jobs and the drag-and-drop
//! reconciliation logic.
//!
//! DESIGN
//! ======
//! The store is the source of truth; the controller holds a possibly-stale
//! copy for rendering and optimistic interaction. A drag applies its
//! status change to the cache synchronously (the card must never snap
//! back), then commits to the store and applies a compensating rollback if
//! the commit fails. Add and remove are confirm-first instead: ids are
//! assigned server-side, so the cache only changes once the store answers.
//!
//! All methods take `&mut self`, so drag events and store responses are
//! serialized; two updates racing on the wire resolve last-write-wins on
//! the server with no client-side ordering.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use model::{Job, JobDraft, Status};

use crate::store::{JobStore, StoreError};

/// What a dragged card was released onto. Each drop zone carries its own
/// tagged payload, so the status resolution below is a case match rather
/// than a property probe on untyped drop data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Empty space in a status column.
    Column(Status),
    /// Another job's card inside a column.
    Job(Uuid),
}

/// Whether the backend answered the initial load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Connected,
    Offline,
}

/// Non-blocking, user-facing notifications. The embedding UI drains these
/// with [`BoardController::take_notices`]; the controller never blocks on
/// error recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoadFailed(String),
    SaveFailed { job_id: Uuid, message: String },
    CreateFailed(String),
    DeleteFailed { job_id: Uuid, message: String },
}

/// One rendered status column.
#[derive(Debug)]
pub struct Column<'a> {
    pub status: Status,
    pub jobs: Vec<&'a Job>,
}

pub struct BoardController {
    store: Arc<dyn JobStore>,
    jobs: Vec<Job>,
    active_drag: Option<Uuid>,
    backend: BackendStatus,
    notices: Vec<Notice>,
}

impl BoardController {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self {
            store,
            jobs: Vec::new(),
            active_drag: None,
            backend: BackendStatus::Connected,
            notices: Vec::new(),
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn backend(&self) -> BackendStatus {
        self.backend
    }

    pub fn active_drag(&self) -> Option<Uuid> {
        self.active_drag
    }

    /// Drains pending notifications for the UI to display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Loads the full job list, replacing the cache wholesale. Runs once
    /// at startup; a failure leaves the cache empty and marks the backend
    /// offline.
    pub async fn load_initial(&mut self) {
        match self.store.list_jobs().await {
            Ok(jobs) => {
                debug!("Loaded {} jobs", jobs.len());
                self.jobs = jobs;
                self.backend = BackendStatus::Connected;
            }
            Err(e) => {
                warn!("Initial load failed: {e}");
                self.jobs.clear();
                self.backend = BackendStatus::Offline;
                self.notices.push(Notice::LoadFailed(e.to_string()));
            }
        }
    }

    /// Records the card being dragged. Purely visual bookkeeping for the
    /// floating overlay; no store call.
    pub fn begin_drag(&mut self, job_id: Uuid) {
        self.active_drag = Some(job_id);
    }

    /// Applies a completed drag: resolves the target status, updates the
    /// cache optimistically, then commits to the store. On commit failure
    /// the status is rolled back and an error notice is queued.
    pub async fn end_drag(&mut self, job_id: Uuid, target: Option<DropTarget>) {
        self.active_drag = None;

        let Some(target) = target else {
            return; // released outside any drop zone
        };

        let new_status = match target {
            DropTarget::Column(status) => status,
            DropTarget::Job(over_id) if over_id == job_id => return, // self-drop
            // Dropped onto another card: the card's current column wins.
            DropTarget::Job(over_id) => match self.find(over_id) {
                Some(over) => over.status,
                None => return,
            },
        };

        let Some(job) = self.jobs.iter_mut().find(|j| j.id == job_id) else {
            return;
        };
        let previous = job.status;
        if previous == new_status {
            return; // same column, nothing to persist
        }

        // Optimistic apply, before the store call, so the card lands in
        // its new column immediately.
        job.status = new_status;

        match self.store.update_status(job_id, new_status).await {
            Ok(_) => debug!("Job {job_id} moved {previous} -> {new_status}"),
            Err(e) => {
                warn!("Status update for {job_id} failed, rolling back: {e}");
                if let Some(job) = self.jobs.iter_mut().find(|j| j.id == job_id) {
                    job.status = previous;
                }
                self.notices.push(Notice::SaveFailed {
                    job_id,
                    message: e.to_string(),
                });
            }
        }
    }

    /// Creates a job with the default `Applied` status. The cache appends
    /// the server-returned record, never a client-made one: the store
    /// assigns the id.
    pub async fn add_job(&mut self, title: impl Into<String>, company: impl Into<String>) {
        let draft = JobDraft::new(title, company);

        match self.store.create_job(&draft).await {
            Ok(job) => {
                debug!("Created job {}", job.id);
                self.jobs.push(job);
            }
            Err(e) => {
                warn!("Create failed: {e}");
                self.notices.push(Notice::CreateFailed(e.to_string()));
            }
        }
    }

    /// Deletes a job. The cache only drops the record once the store
    /// confirms; on failure the cache is untouched.
    pub async fn remove_job(&mut self, job_id: Uuid) {
        match self.store.delete_job(job_id).await {
            Ok(()) => {
                debug!("Deleted job {job_id}");
                self.jobs.retain(|j| j.id != job_id);
            }
            Err(e) => {
                warn!("Delete for {job_id} failed: {e}");
                self.notices.push(Notice::DeleteFailed {
                    job_id,
                    message: e.to_string(),
                });
            }
        }
    }

    /// Derives the four status columns from the cache, in board order.
    /// Pure view of current state; no side effects.
    pub fn columns_view(&self) -> Vec<Column<'_>> {
        Status::ALL
            .iter()
            .map(|&status| Column {
                status,
                jobs: self.jobs.iter().filter(|j| j.status == status).collect(),
            })
            .collect()
    }

    fn find(&self, job_id: Uuid) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == job_id)
    }
}

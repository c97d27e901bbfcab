//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use model::{DeleteConfirmation, Job, JobDraft, StatusPatch};

use crate::errors::AppError;
use crate::state::AppState;
use crate::store;

/// Deserializes a request body into its typed shape, mapping any mismatch
/// (missing field, unknown field, out-of-enum status) to a 400.
fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
}

fn validate_draft(draft: &JobDraft) -> Result<(), AppError> {
    if draft.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if draft.company.trim().is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }
    Ok(())
}

/// GET /jobs
///
/// Returns all jobs in insertion order.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = store::list_jobs(&state.db).await?;
    Ok(Json(jobs))
}

/// POST /jobs
///
/// Persists a candidate job, assigns its id, and returns the full record.
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let draft: JobDraft = parse_body(body)?;
    validate_draft(&draft)?;

    let job = store::insert_job(&state.db, &draft).await?;
    tracing::info!("Created job {} ({} at {})", job.id, job.title, job.company);

    Ok((StatusCode::CREATED, Json(job)))
}

/// PATCH /jobs/:id
///
/// Status is the only patchable field; the typed patch shape rejects
/// anything else before the store is touched.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Json<Job>, AppError> {
    let patch: StatusPatch = parse_body(body)?;

    let job = store::update_status(&state.db, id, patch.status).await?;
    tracing::info!("Job {} moved to {}", job.id, job.status);

    Ok(Json(job))
}

/// DELETE /jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    store::delete_job(&state.db, id).await?;
    tracing::info!("Deleted job {id}");

    Ok(Json(DeleteConfirmation {
        message: format!("Job {id} deleted"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Status;
    use serde_json::json;

    #[test]
    fn test_validate_draft_rejects_blank_title() {
        let draft: JobDraft = parse_body(json!({"title": "  ", "company": "Acme"})).unwrap();
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn test_validate_draft_rejects_missing_company() {
        assert!(parse_body::<JobDraft>(json!({"title": "Dev"})).is_err());
    }

    #[test]
    fn test_validate_draft_accepts_minimal_candidate() {
        let draft: JobDraft =
            parse_body(json!({"title": "Frontend Dev", "company": "Tech Co"})).unwrap();
        assert!(validate_draft(&draft).is_ok());
        assert_eq!(draft.status, Status::Applied);
    }

    #[test]
    fn test_patch_rejects_title_edit() {
        let result = parse_body::<StatusPatch>(json!({"status": "Offer", "title": "New"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_accepts_each_column_status() {
        for status in Status::ALL {
            let patch: StatusPatch =
                parse_body(json!({ "status": status.as_str() })).unwrap();
            assert_eq!(patch.status, status);
        }
    }
}

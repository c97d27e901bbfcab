//! Job persistence — CRUD over the `jobs` table.
//!
//! Route handlers stay protocol-only; every query lives here. Status is
//! stored as TEXT and parsed back through the typed wire model, so a row
//! that fails to parse is surfaced as an internal error rather than
//! leaking an out-of-enum value to clients.

use anyhow::anyhow;
use sqlx::PgPool;
use uuid::Uuid;

use model::{Job, JobDraft, Status};

use crate::errors::AppError;

type JobTuple = (Uuid, String, String, String);

fn row_to_job((id, title, company, status): JobTuple) -> Result<Job, AppError> {
    let status: Status = status
        .parse()
        .map_err(|e| AppError::Internal(anyhow!("corrupt status for job {id}: {e}")))?;
    Ok(Job {
        id,
        title,
        company,
        status,
    })
}

/// Returns all jobs in insertion order.
pub async fn list_jobs(pool: &PgPool) -> Result<Vec<Job>, AppError> {
    let rows = sqlx::query_as::<_, JobTuple>(
        "SELECT id, title, company, status FROM jobs ORDER BY created_at",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(row_to_job).collect()
}

/// Inserts a candidate job, assigning its id, and returns the full record.
pub async fn insert_job(pool: &PgPool, draft: &JobDraft) -> Result<Job, AppError> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO jobs (id, title, company, status) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.company)
        .bind(draft.status.as_str())
        .execute(pool)
        .await?;

    Ok(Job {
        id,
        title: draft.title.clone(),
        company: draft.company.clone(),
        status: draft.status,
    })
}

/// Applies a status change and returns the updated record.
pub async fn update_status(pool: &PgPool, id: Uuid, status: Status) -> Result<Job, AppError> {
    let row = sqlx::query_as::<_, JobTuple>(
        "UPDATE jobs SET status = $1, updated_at = now()
         WHERE id = $2
         RETURNING id, title, company, status",
    )
    .bind(status.as_str())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    row_to_job(row)
}

/// Removes a job. Deletion is permanent and immediate.
pub async fn delete_job(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Job {id} not found")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_job_parses_status() {
        let id = Uuid::new_v4();
        let job = row_to_job((
            id,
            "Frontend Dev".to_string(),
            "Tech Co".to_string(),
            "Interviewing".to_string(),
        ))
        .unwrap();
        assert_eq!(job.id, id);
        assert_eq!(job.status, Status::Interviewing);
    }

    #[test]
    fn test_row_to_job_rejects_corrupt_status() {
        let row = (
            Uuid::new_v4(),
            "Dev".to_string(),
            "Acme".to_string(),
            "Shortlisted".to_string(),
        );
        assert!(row_to_job(row).is_err());
    }
}

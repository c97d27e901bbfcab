//! Wire model shared by the job store service and the board client.
//!
//! The JSON shapes here are the REST contract: `Job` serializes its id as
//! `_id`, and `Status` serializes as the four capitalized column names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The Kanban column a job belongs to. Closed set; any transition between
/// variants is legal via drag-and-drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl Status {
    /// Board column order, left to right.
    pub const ALL: [Status; 4] = [
        Status::Applied,
        Status::Interviewing,
        Status::Offer,
        Status::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interviewing => "Interviewing",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Applied" => Ok(Status::Applied),
            "Interviewing" => Ok(Status::Interviewing),
            "Offer" => Ok(Status::Offer),
            "Rejected" => Ok(Status::Rejected),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A tracked job application. `id` is assigned by the store at insert and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub status: Status,
}

/// Create payload: a candidate job without an id. Omitted status defaults
/// to `Applied`, matching the board's add action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    #[serde(default = "default_status")]
    pub status: Status,
}

fn default_status() -> Status {
    Status::Applied
}

impl JobDraft {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            status: Status::Applied,
        }
    }
}

/// Update payload for PATCH /jobs/:id. Status is the only patchable field;
/// unknown fields are rejected so title/company cannot be edited through
/// this endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusPatch {
    pub status: Status,
}

/// Error payload returned by the store on every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Confirmation payload returned by DELETE /jobs/:id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_column_names() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_status_round_trips_through_from_str() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        assert!("Ghosted".parse::<Status>().is_err());
        assert!(serde_json::from_str::<Status>("\"applied\"").is_err());
    }

    #[test]
    fn test_job_serializes_id_as_underscore_id() {
        let job = Job {
            id: Uuid::new_v4(),
            title: "Frontend Dev".to_string(),
            company: "Tech Co".to_string(),
            status: Status::Applied,
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["_id"], job.id.to_string());
        assert_eq!(value["status"], "Applied");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_job_deserializes_wire_shape() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"_id":"{id}","title":"Backend Dev","company":"Acme","status":"Offer"}}"#
        );
        let job: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(job.id, id);
        assert_eq!(job.status, Status::Offer);
    }

    #[test]
    fn test_draft_status_defaults_to_applied() {
        let draft: JobDraft =
            serde_json::from_str(r#"{"title":"Dev","company":"Acme"}"#).unwrap();
        assert_eq!(draft.status, Status::Applied);
    }

    #[test]
    fn test_status_patch_rejects_unknown_fields() {
        let err = serde_json::from_str::<StatusPatch>(
            r#"{"status":"Offer","title":"sneaky"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_status_patch_rejects_out_of_enum_status() {
        assert!(serde_json::from_str::<StatusPatch>(r#"{"status":"Pending"}"#).is_err());
    }
}

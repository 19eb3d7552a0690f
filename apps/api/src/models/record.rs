//! Persisted resume records.
//!
//! Storage is an external collaborator: the engine reads and writes records
//! as given, it never derives layout decisions from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One saved resume, owned by an authenticated user.
///
/// `resume_data` holds the full `ResumeData` payload as JSON; it is validated
/// against the schema on write but stored opaquely. `tailoring_metadata` is
/// present only for job-tailored copies.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRecordRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub resume_data: Value,
    pub is_tailored: bool,
    pub tailoring_metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//! Axum handlers for saved-resume CRUD.
//!
//! Every payload is validated against the `ResumeData` schema before it is
//! stored, so a record read back later is always renderable.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::record::ResumeRecordRow;
use crate::models::resume::ResumeData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    pub title: String,
    pub resume_data: Value,
    #[serde(default)]
    pub is_tailored: bool,
    #[serde(default)]
    pub tailoring_metadata: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResumeRequest {
    pub user_id: Uuid,
    pub title: String,
    pub resume_data: Value,
}

/// The frontend gateway injects the authenticated user id; a request that
/// arrives without one (nil uuid) is rejected rather than treated as a user.
fn require_user(user_id: Uuid) -> Result<Uuid, AppError> {
    if user_id.is_nil() {
        return Err(AppError::Unauthorized);
    }
    Ok(user_id)
}

fn validate_payload(resume_data: &Value) -> Result<(), AppError> {
    serde_json::from_value::<ResumeData>(resume_data.clone())
        .map(|_| ())
        .map_err(|e| AppError::Validation(format!("invalid resume data: {e}")))
}

/// GET /api/v1/resumes
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeRecordRow>>, AppError> {
    let user_id = require_user(params.user_id)?;
    let rows = super::list_resumes(&state.db, user_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRecordRow>, AppError> {
    let user_id = require_user(params.user_id)?;
    let row = super::get_resume(&state.db, user_id, id).await?;
    Ok(Json(row))
}

/// POST /api/v1/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRecordRow>), AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".into()));
    }
    validate_payload(&req.resume_data)?;
    let user_id = require_user(req.user_id)?;
    let row = super::create_resume(
        &state.db,
        user_id,
        &req.title,
        &req.resume_data,
        req.is_tailored,
        req.tailoring_metadata.as_ref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateResumeRequest>,
) -> Result<Json<ResumeRecordRow>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".into()));
    }
    validate_payload(&req.resume_data)?;
    let user_id = require_user(req.user_id)?;
    let row =
        super::update_resume(&state.db, user_id, id, &req.title, &req.resume_data).await?;
    Ok(Json(row))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let user_id = require_user(params.user_id)?;
    super::delete_resume(&state.db, user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

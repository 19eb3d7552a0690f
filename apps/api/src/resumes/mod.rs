//! Saved-resume CRUD.

pub mod handlers;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::record::ResumeRecordRow;

pub async fn list_resumes(db: &PgPool, user_id: Uuid) -> Result<Vec<ResumeRecordRow>, AppError> {
    let rows = sqlx::query_as::<_, ResumeRecordRow>(
        "SELECT * FROM resume_records WHERE user_id = $1 ORDER BY updated_at DESC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn get_resume(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<ResumeRecordRow, AppError> {
    sqlx::query_as::<_, ResumeRecordRow>(
        "SELECT * FROM resume_records WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("resume {id} not found")))
}

pub async fn create_resume(
    db: &PgPool,
    user_id: Uuid,
    title: &str,
    resume_data: &serde_json::Value,
    is_tailored: bool,
    tailoring_metadata: Option<&serde_json::Value>,
) -> Result<ResumeRecordRow, AppError> {
    let row = sqlx::query_as::<_, ResumeRecordRow>(
        r#"
        INSERT INTO resume_records
            (id, user_id, title, resume_data, is_tailored, tailoring_metadata, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(title)
    .bind(resume_data)
    .bind(is_tailored)
    .bind(tailoring_metadata)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn update_resume(
    db: &PgPool,
    user_id: Uuid,
    id: Uuid,
    title: &str,
    resume_data: &serde_json::Value,
) -> Result<ResumeRecordRow, AppError> {
    sqlx::query_as::<_, ResumeRecordRow>(
        r#"
        UPDATE resume_records
        SET title = $1, resume_data = $2, updated_at = NOW()
        WHERE id = $3 AND user_id = $4
        RETURNING *
        "#,
    )
    .bind(title)
    .bind(resume_data)
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("resume {id} not found")))
}

pub async fn delete_resume(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM resume_records WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("resume {id} not found")));
    }
    Ok(())
}

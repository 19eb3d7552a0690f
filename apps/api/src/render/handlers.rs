//! Axum handlers for the template catalog and the render pipeline.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;
use crate::templates::TemplateMeta;

use super::{render_document, RenderedDocument};

// ────────────────────────────────────────────────────────────────────────────
// GET /api/v1/templates
// ────────────────────────────────────────────────────────────────────────────

pub async fn handle_list_templates(
    State(state): State<AppState>,
) -> Json<Vec<&'static TemplateMeta>> {
    Json(state.templates.list())
}

// ────────────────────────────────────────────────────────────────────────────
// POST /api/v1/render/preview and /api/v1/render/pdf
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub template_id: String,
    #[serde(default)]
    pub language: Option<String>,
    pub resume_data: serde_json::Value,
}

/// Renders all pages as HTML fragments for the in-browser preview.
pub async fn handle_render_preview(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderedDocument>, AppError> {
    let doc = run_render(&state, req).await?;
    Ok(Json(doc))
}

/// Renders all pages and forwards them to the capture service, streaming the
/// resulting PDF back to the caller.
pub async fn handle_render_pdf(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let doc = run_render(&state, req).await?;
    let pdf = state.pdf.capture(&doc).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"resume-{}.pdf\"", doc.template_id),
            ),
        ],
        pdf,
    ))
}

/// Validates the payload and runs measure + paginate + render off the async
/// runtime. The layout pass is CPU-bound.
async fn run_render(state: &AppState, req: RenderRequest) -> Result<RenderedDocument, AppError> {
    let data: ResumeData = serde_json::from_value(req.resume_data)
        .map_err(|e| AppError::Validation(format!("invalid resume data: {e}")))?;
    let language = req
        .language
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| {
            if data.language.is_empty() {
                "en".to_string()
            } else {
                data.language.clone()
            }
        });

    let registry = state.templates.clone();
    let template_id = req.template_id;
    tokio::task::spawn_blocking(move || {
        let template = registry.get(&template_id)?;
        render_document(&data, template, &language)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))?
}

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::render::PdfCapture;
use crate::templates::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Built-in template skins, keyed by id.
    pub templates: Arc<TemplateRegistry>,
    /// External headless-browser capture service.
    pub pdf: Arc<dyn PdfCapture>,
    pub config: Config,
}

mod config;
mod db;
mod errors;
mod layout;
mod locale;
mod models;
mod render;
mod resumes;
mod routes;
mod state;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::render::{HttpPdfCapture, PdfCapture};
use crate::routes::build_router;
use crate::state::AppState;
use crate::templates::TemplateRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeForge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Template catalog
    let templates = Arc::new(TemplateRegistry::with_builtins());
    info!("Template registry loaded ({} skins)", templates.list().len());

    // PDF capture collaborator
    let pdf: Arc<dyn PdfCapture> =
        Arc::new(HttpPdfCapture::new(config.pdf_capture_url.clone()));
    info!("PDF capture endpoint: {}", config.pdf_capture_url);

    // Build app state
    let state = AppState {
        db,
        templates,
        pdf,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

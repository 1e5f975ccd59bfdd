//! API Routes
//!
//! - `/upload` - document upload and text extraction
//! - `/api/summarize`, `/api/write`, `/api/expand`, `/api/proofread` - generative relays
//! - `/api/translate` - translation relay
//! - `/api/health` - health check
//! - `/` - static front end

pub mod health;
pub mod notes;
pub mod proofread;
pub mod static_files;
pub mod summarize;
pub mod translate;
pub mod upload;

use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::middleware::apply_cors;
use crate::models::AppState;
use crate::types::{AppError, AppResult};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let api_router = Router::new()
        .merge(upload::router(state.config.upload.max_file_size))
        .merge(summarize::router())
        .merge(notes::router())
        .merge(translate::router())
        .merge(proofread::router())
        .merge(health::router());

    let router = Router::new()
        .merge(api_router)
        .merge(static_files::router(&state.config.server.static_dir))
        .layer(trace_layer)
        .with_state(state.clone());

    apply_cors(router, &state.config.server.cors_allowed_origins)
}

/// Accept a required text field only when it has non-whitespace content.
pub(crate) fn required(value: Option<String>, message: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::invalid(message)),
    }
}

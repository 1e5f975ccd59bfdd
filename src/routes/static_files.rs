//! Static File Serving
//!
//! Serves the front end: `index.html` at `/` and assets under `/static`.

use std::path::{Path, PathBuf};

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::services::ServeDir;
use tracing::warn;

use crate::models::AppState;

pub fn router(static_dir: &Path) -> Router<AppState> {
    if !static_dir.is_dir() {
        warn!(path = %static_dir.display(), "Static files directory not found, serving built-in index");
    }

    Router::new()
        .route("/", get(serve_index))
        .nest_service("/static", ServeDir::new(static_dir))
}

async fn serve_index(State(state): State<AppState>) -> impl IntoResponse {
    let index: PathBuf = state.config.server.static_dir.join("index.html");

    let body = match tokio::fs::read_to_string(&index).await {
        Ok(content) => content,
        Err(_) => FALLBACK_INDEX.to_string(),
    };

    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], body)
}

const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>StudyMate</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 760px; margin: 0 auto; padding: 40px 20px; }
        code { background: #f0f0f5; padding: 2px 6px; border-radius: 4px; }
    </style>
</head>
<body>
    <h1>StudyMate</h1>
    <p>The API server is running. No front end was found in the static directory.</p>
    <ul>
        <li><code>POST /upload</code> - extract text from a PDF or TXT file</li>
        <li><code>POST /api/summarize</code> - summarize text</li>
        <li><code>POST /api/write</code> - write study notes on a topic</li>
        <li><code>POST /api/expand</code> - expand existing notes</li>
        <li><code>POST /api/translate</code> - translate text</li>
        <li><code>POST /api/proofread</code> - proofread text</li>
        <li><code>GET /api/health</code> - health check</li>
    </ul>
</body>
</html>"#;

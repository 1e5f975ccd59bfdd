use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{debug, info, warn};

use crate::documents::{self, check_size, sanitize_filename, DocumentKind, ScopedUpload};
use crate::models::{AppState, UploadResponse};
use crate::types::{AppError, AppResult};

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn router(max_file_size: usize) -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(upload_file).layer(DefaultBodyLimit::max(max_file_size + MULTIPART_OVERHEAD)),
    )
}

#[tracing::instrument(skip(state, multipart))]
async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let mut multipart = multipart
        .map_err(|e| AppError::invalid(format!("Invalid upload: {}", e.body_text())))?;
    let upload_config = &state.config.upload;
    let max = upload_config.max_file_size;

    let (original_name, kind, data) = read_file_field(&mut multipart, max).await?;

    let filename = sanitize_filename(&original_name)
        .ok_or_else(|| AppError::invalid("Invalid filename"))?;

    info!(filename = %filename, bytes = data.len(), "File upload received");

    let upload = ScopedUpload::persist(&upload_config.dir, &filename, kind, data)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to store upload: {}", e)))?;

    let extracted = documents::extract(upload.path(), upload.kind()).await;
    upload.release();

    let text = match extracted {
        Ok(text) => text,
        Err(e) if upload_config.inline_extraction_errors => {
            warn!(filename = %filename, error = %e, "Extraction failed, returning error text");
            e.to_string()
        }
        Err(e) => return Err(AppError::Extraction(e.to_string())),
    };

    debug!(chars = text.chars().count(), "Upload processed");

    Ok(Json(UploadResponse {
        success: true,
        text,
        filename,
    }))
}

/// Find the `file` part and read it, refusing anything past `max` bytes.
async fn read_file_field(
    multipart: &mut Multipart,
    max: usize,
) -> AppResult<(String, DocumentKind, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.trim().is_empty() {
            return Err(AppError::invalid("No file selected"));
        }
        let kind = DocumentKind::from_filename(&filename)
            .ok_or_else(|| AppError::invalid("Invalid file type. Only PDF and TXT allowed"))?;

        let data = read_limited(field, max).await?;
        return Ok((filename, kind, data));
    }

    Err(AppError::invalid("No file provided"))
}

async fn read_limited(mut field: Field<'_>, max: usize) -> AppResult<Vec<u8>> {
    let mut data = Vec::new();
    while let Some(chunk) = field.chunk().await.map_err(|e| multipart_error(e, max))? {
        check_size(data.len() + chunk.len(), max)?;
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

fn multipart_error(err: MultipartError, max: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit_bytes: max }
    } else {
        AppError::invalid(format!("Failed to read upload: {}", err.body_text()))
    }
}

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use crate::models::{AppState, TranslateRequest, TranslationResponse};
use crate::routes::required;
use crate::types::{AppError, AppResult, Capability, TranslationRequest};

const DEFAULT_SOURCE_LANGUAGE: &str = "en";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/translate", post(translate))
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> AppResult<Json<TranslationResponse>> {
    let Json(request) = payload?;
    let request = validate(request)?;

    info!(
        source = %request.source,
        target = %request.target,
        chars = request.text.chars().count(),
        "Translate request received"
    );

    let translation = state
        .translator
        .translate(&request)
        .await
        .map_err(|e| AppError::relay(Capability::Translation, e))?;

    Ok(Json(TranslationResponse {
        success: true,
        translation,
    }))
}

fn validate(request: TranslateRequest) -> AppResult<TranslationRequest> {
    let text = required(request.text, "No text provided")?;
    let target = language_code(
        &required(request.target, "Target language is required")?,
    )?;
    let source = match request.source.filter(|s| !s.trim().is_empty()) {
        Some(source) => language_code(&source)?,
        None => DEFAULT_SOURCE_LANGUAGE.to_string(),
    };

    if source.eq_ignore_ascii_case(&target) {
        return Err(AppError::invalid("Source and target languages must be different"));
    }

    Ok(TranslationRequest {
        text,
        source,
        target,
    })
}

/// Accept language tags such as `en`, `zh-CN` or `pt-BR`.
fn language_code(code: &str) -> AppResult<String> {
    let code = code.trim();
    let well_formed = (2..=12).contains(&code.len())
        && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !code.starts_with('-')
        && !code.ends_with('-');

    if !well_formed {
        return Err(AppError::invalid(format!("Invalid language code: {}", code)));
    }
    Ok(code.to_string())
}

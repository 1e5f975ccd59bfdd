use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use crate::models::{AppState, ProofreadRequest, ProofreadResponse};
use crate::prompts::proofread_prompt;
use crate::routes::required;
use crate::types::{AppError, AppResult, Capability};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/proofread", post(proofread))
}

async fn proofread(
    State(state): State<AppState>,
    payload: Result<Json<ProofreadRequest>, JsonRejection>,
) -> AppResult<Json<ProofreadResponse>> {
    let Json(request) = payload?;
    let text = required(request.text, "No text provided")?;

    info!(check = ?request.check_type, format = ?request.format, "Proofread request received");

    let prompt = proofread_prompt(&text, request.check_type, request.format);
    let result = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::relay(Capability::Proofreading, e))?;

    Ok(Json(ProofreadResponse {
        success: true,
        result,
    }))
}

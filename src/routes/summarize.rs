use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use crate::models::{AppState, SummarizeRequest, SummaryResponse};
use crate::prompts::{summarize_prompt, SummaryOptions, SUMMARY_CHAR_BUDGET};
use crate::routes::required;
use crate::types::{AppError, AppResult, Capability};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/summarize", post(summarize))
}

async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> AppResult<Json<SummaryResponse>> {
    let Json(request) = payload?;
    let text = required(request.text, "No text provided")?;

    let options = SummaryOptions {
        summary_type: request.summary_type,
        length: request.length,
        format: request.format,
    };

    let chars = text.chars().count();
    info!(
        chars,
        truncated = chars > SUMMARY_CHAR_BUDGET,
        summary_type = ?options.summary_type,
        "Summarize request received"
    );

    let prompt = summarize_prompt(&text, &options);
    let summary = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::relay(Capability::Summarization, e))?;

    Ok(Json(SummaryResponse {
        success: true,
        summary,
    }))
}

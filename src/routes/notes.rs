use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use crate::models::{AppState, ExpandNotesRequest, NotesResponse, WriteNotesRequest};
use crate::prompts::{expand_notes_prompt, write_notes_prompt, NotesOptions};
use crate::routes::required;
use crate::types::{AppError, AppResult, Capability};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/write", post(write_notes))
        .route("/api/expand", post(expand_notes))
}

async fn write_notes(
    State(state): State<AppState>,
    payload: Result<Json<WriteNotesRequest>, JsonRejection>,
) -> AppResult<Json<NotesResponse>> {
    let Json(request) = payload?;
    let topic = required(request.topic, "Topic is required")?;

    let options = NotesOptions {
        tone: request.tone,
        length: request.length,
        structure: request.structure,
    };
    info!(tone = ?options.tone, length = ?options.length, "Write notes request received");

    let prompt = write_notes_prompt(topic.trim(), request.context.as_deref(), &options);
    let notes = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::relay(Capability::Writing, e))?;

    Ok(Json(NotesResponse {
        success: true,
        notes,
    }))
}

async fn expand_notes(
    State(state): State<AppState>,
    payload: Result<Json<ExpandNotesRequest>, JsonRejection>,
) -> AppResult<Json<NotesResponse>> {
    let Json(request) = payload?;
    let notes = required(request.notes, "Notes are required")?;

    info!(chars = notes.chars().count(), "Expand notes request received");

    let prompt = expand_notes_prompt(&notes, request.topic.as_deref());
    let expanded = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::relay(Capability::Expansion, e))?;

    Ok(Json(NotesResponse {
        success: true,
        notes: expanded,
    }))
}

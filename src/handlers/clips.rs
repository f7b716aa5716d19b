use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::speak::synthesize_wav;
use crate::core::voices::DEFAULT_VOICE;
use crate::errors::app_error::{AppError, AppResult};
use crate::state::AppState;

/// Session used when a request does not name one
pub const DEFAULT_SESSION: &str = "default";

/// Request body for creating a clip
#[derive(Debug, Deserialize)]
pub struct CreateClipRequest {
    pub text: String,
    #[serde(default)]
    pub voice: Option<String>,
    /// Session whose previous clip is replaced
    #[serde(default)]
    pub session: Option<String>,
}

/// Response for a stored clip
#[derive(Debug, Serialize, Deserialize)]
pub struct ClipResponse {
    pub id: Uuid,
    pub url: String,
    pub bytes: usize,
}

/// Handler for `POST /clips`
///
/// Generates speech, stores it, and makes it the session's current clip.
/// The session's previous clip is released.
pub async fn create_clip(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateClipRequest>,
) -> AppResult<(StatusCode, Json<ClipResponse>)> {
    let voice = request.voice.as_deref().unwrap_or(DEFAULT_VOICE);
    let session = request.session.as_deref().unwrap_or(DEFAULT_SESSION);

    let wav = synthesize_wav(&state, &request.text, voice).await?;
    let bytes = wav.len();

    let handle = state.clips.insert(wav);
    let id = handle.id();
    state.set_session_clip(session, handle);

    info!(%id, session, bytes, "Stored clip");

    Ok((
        StatusCode::CREATED,
        Json(ClipResponse {
            id,
            url: format!("/clips/{id}"),
            bytes,
        }),
    ))
}

/// Handler for `GET /clips/{id}`
pub async fn get_clip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let wav = state
        .clips
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Clip {id} not found")))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/wav".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{id}.wav\""),
            ),
        ],
        wav,
    )
        .into_response())
}

/// Handler for `DELETE /clips/{id}`
pub async fn delete_clip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if !state.release_clip(id) {
        return Err(AppError::NotFound(format!("Clip {id} not found")));
    }
    info!(%id, "Released clip");
    Ok(StatusCode::NO_CONTENT)
}

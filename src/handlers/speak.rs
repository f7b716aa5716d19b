use axum::{
    extract::State,
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::core::speech::{OUTPUT_FORMAT, generate_speech, validate_request};
use crate::core::tts::create_speech_client;
use crate::core::voices::DEFAULT_VOICE;
use crate::errors::app_error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for the speak endpoint
#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    /// The text to synthesize
    pub text: String,
    /// Prebuilt voice id, defaults to `Kore`
    #[serde(default)]
    pub voice: Option<String>,
}

impl SpeakRequest {
    pub fn voice(&self) -> &str {
        self.voice.as_deref().unwrap_or(DEFAULT_VOICE)
    }
}

/// Synthesizes `text` with a client built for this request only.
pub(crate) async fn synthesize_wav(
    state: &AppState,
    text: &str,
    voice: &str,
) -> AppResult<Vec<u8>> {
    validate_request(text, voice, state.config.max_text_length)?;

    let gemini_config = state.config.gemini_config().map_err(|e| {
        error!("Failed to get Gemini API key: {}", e);
        AppError::InternalServerError(e)
    })?;

    let client = create_speech_client(gemini_config)
        .map_err(|e| AppError::InternalServerError(format!("Failed to create TTS client: {e}")))?;

    Ok(generate_speech(client.as_ref(), text, voice).await?)
}

/// Handler for the /speak endpoint
///
/// Returns the generated speech as a downloadable WAV file.
pub async fn speak_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SpeakRequest>,
) -> AppResult<Response> {
    info!(
        "Speak request received - voice: {}, text length: {}",
        request.voice(),
        request.text.len()
    );

    let wav = synthesize_wav(&state, &request.text, request.voice()).await?;

    info!("TTS synthesis successful - {} bytes", wav.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/wav".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"speech.wav\"".to_string(),
            ),
            (
                HeaderName::from_static("x-sample-rate"),
                OUTPUT_FORMAT.sample_rate.to_string(),
            ),
        ],
        wav,
    )
        .into_response())
}

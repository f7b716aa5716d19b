use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::core::audio::AudioError;
use crate::core::speech::SpeechError;
use crate::core::tts::TTSError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    BadGateway(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                msg
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                msg
            }
            AppError::BadGateway(msg) => {
                tracing::error!("Upstream failure: {}", msg);
                msg
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InternalServerError(msg) => write!(f, "Internal server error: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::BadGateway(msg) => write!(f, "Bad gateway: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<SpeechError> for AppError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::EmptyText
            | SpeechError::TextTooLong { .. }
            | SpeechError::UnknownVoice(_) => AppError::BadRequest(err.to_string()),
            SpeechError::Synthesis(ref tts) => {
                tracing::error!("Speech synthesis failed: {}", tts);
                let message = match tts {
                    TTSError::NoAudio(msg) => msg.as_str(),
                    TTSError::TimeoutError(_) => "Speech provider timed out",
                    TTSError::NetworkError(_) => "Speech provider unreachable",
                    TTSError::ProviderError(_) | TTSError::InvalidConfiguration(_) => {
                        "Speech provider request failed"
                    }
                };
                AppError::BadGateway(message.to_string())
            }
            SpeechError::Audio(ref audio) => {
                tracing::error!("Audio conversion failed: {}", audio);
                let message = match audio {
                    AudioError::Decode(_) => "Invalid base64 audio payload from speech provider",
                    AudioError::Allocation { .. } | AudioError::InvalidFormat { .. } => {
                        "Failed to build WAV audio"
                    }
                };
                AppError::BadGateway(message.to_string())
            }
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

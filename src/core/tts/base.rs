//! # TTS Base Trait
//!
//! Provider-neutral abstraction over a remote speech-synthesis call: text and a
//! voice go in, a base64 audio payload comes out. Decoding and containerizing
//! that payload is left to [`crate::core::audio`].
//!
//! ```rust,ignore
//! use speechwav::core::tts::{SpeechSynthesizer, GeminiTTS, GeminiTTSConfig};
//!
//! let tts = GeminiTTS::new(GeminiTTSConfig::new("api-key"))?;
//! let audio = tts.synthesize("Hello everyone", "Kore").await?;
//! println!("{} base64 symbols", audio.payload.len());
//! ```

use async_trait::async_trait;

/// Audio returned by a speech provider, still transport-encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    /// Base64 encoded PCM audio
    pub payload: String,
    /// MIME type reported by the provider (e.g. "audio/L16;codec=pcm;rate=24000")
    pub mime_type: Option<String>,
}

/// TTS-specific error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum TTSError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("No audio returned: {0}")]
    NoAudio(String),

    #[error("Timeout error: {0}")]
    TimeoutError(String),
}

/// Result type for TTS operations
pub type TTSResult<T> = Result<T, TTSError>;

/// A remote speech-synthesis backend
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesizes `text` with the given provider voice.
    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<SynthesizedAudio>;

    /// Provider metadata for diagnostics
    fn get_provider_info(&self) -> serde_json::Value;
}

impl From<reqwest::Error> for TTSError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TTSError::TimeoutError(format!("HTTP request timed out: {e}"))
        } else {
            TTSError::NetworkError(format!("HTTP request failed: {e}"))
        }
    }
}

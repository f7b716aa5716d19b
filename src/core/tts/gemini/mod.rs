//! Gemini text-to-speech provider.
//!
//! - **config**: `GeminiTTSConfig` (API key, model, host, timeout)
//! - **provider**: `GeminiRequestBuilder` and the `GeminiTTS` synthesizer
//!
//! # Usage
//!
//! ```rust,ignore
//! use speechwav::core::tts::{GeminiTTS, GeminiTTSConfig, SpeechSynthesizer};
//!
//! let tts = GeminiTTS::new(GeminiTTSConfig::new(api_key))?;
//! let audio = tts.synthesize("Hello everyone, how are you", "Kore").await?;
//! ```

mod config;
mod provider;

pub use config::{
    GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_MODEL, GEMINI_DEFAULT_TIMEOUT_SECS, GeminiTTSConfig,
};
pub use provider::{GeminiRequestBuilder, GeminiTTS, NO_AUDIO_MESSAGE};

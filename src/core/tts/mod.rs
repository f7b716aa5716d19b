mod base;
pub mod gemini;

pub use base::{SpeechSynthesizer, SynthesizedAudio, TTSError, TTSResult};
pub use gemini::{GeminiTTS, GeminiTTSConfig};

/// Creates a fresh synthesizer for a single request.
///
/// Credentials are taken from `config` on every call; no client is shared
/// between requests.
pub fn create_speech_client(config: GeminiTTSConfig) -> TTSResult<Box<dyn SpeechSynthesizer>> {
    Ok(Box::new(GeminiTTS::new(config)?))
}

//! Text-to-WAV pipeline: synthesize, decode, containerize.

use tracing::info;

use crate::core::audio::{AudioError, AudioFormat, pcm_payload_to_wav};
use crate::core::tts::{SpeechSynthesizer, TTSError};
use crate::core::voices::find_voice;

/// Errors from a full text-to-WAV generation
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpeechError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Text is too long: {len} characters (max {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("Unknown voice: {0}")]
    UnknownVoice(String),

    #[error(transparent)]
    Synthesis(#[from] TTSError),

    #[error(transparent)]
    Audio(#[from] AudioError),
}

/// Output format of every supported voice
pub const OUTPUT_FORMAT: AudioFormat = AudioFormat::GEMINI_PCM;

/// Checks text and voice before any network call is made.
pub fn validate_request(text: &str, voice: &str, max_len: usize) -> Result<(), SpeechError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SpeechError::EmptyText);
    }
    let len = text.chars().count();
    if len > max_len {
        return Err(SpeechError::TextTooLong { len, max: max_len });
    }
    if find_voice(voice).is_none() {
        return Err(SpeechError::UnknownVoice(voice.to_string()));
    }
    Ok(())
}

/// Generates a complete WAV file for `text` spoken by `voice`.
///
/// Text is trimmed before synthesis. The provider payload is decoded and
/// wrapped as 24 kHz mono 16-bit PCM.
pub async fn generate_speech(
    synthesizer: &dyn SpeechSynthesizer,
    text: &str,
    voice: &str,
) -> Result<Vec<u8>, SpeechError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SpeechError::EmptyText);
    }
    if find_voice(voice).is_none() {
        return Err(SpeechError::UnknownVoice(voice.to_string()));
    }

    let audio = synthesizer.synthesize(text, voice).await?;
    let wav = pcm_payload_to_wav(&audio.payload, OUTPUT_FORMAT)?;

    info!(voice, wav_bytes = wav.len(), "Generated speech");
    Ok(wav)
}

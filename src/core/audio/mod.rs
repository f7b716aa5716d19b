//! Audio payload handling.
//!
//! Converts the base64 PCM payload returned by a speech provider into a
//! self-describing WAV file:
//!
//! - **transport**: base64 decoding (`decode_base64`, `DecodeError`)
//! - **wav**: RIFF/WAVE container encoding (`encode_wav`, `AudioFormat`)
//!
//! Everything here is a pure, synchronous transformation and may be called
//! from any number of tasks at once.

mod transport;
mod wav;

pub use transport::{DecodeError, decode_base64};
pub use wav::{AudioFormat, WAV_HEADER_SIZE, encode_wav};

/// Errors produced while turning a provider payload into a WAV file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AudioError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Cannot allocate a WAV container for {requested} bytes")]
    Allocation { requested: usize },

    #[error(
        "Unsupported PCM layout: {sample_rate} Hz, {channels} channels, {bits_per_sample} bits"
    )]
    InvalidFormat {
        sample_rate: u32,
        channels: u16,
        bits_per_sample: u16,
    },
}

/// Decodes a base64 PCM payload and wraps it in a WAV container.
///
/// No buffer is produced if either step fails.
pub fn pcm_payload_to_wav(payload: &str, format: AudioFormat) -> Result<Vec<u8>, AudioError> {
    let pcm = decode_base64(payload)?;
    encode_wav(&pcm, format)
}

//! RIFF/WAVE container encoding for raw linear PCM.
//!
//! Browsers and media players cannot play headerless PCM, so provider output
//! is wrapped in the canonical 44-byte WAV header:
//!
//! ```text
//! offset  size  field
//!  0      4     "RIFF"
//!  4      4     chunk size (36 + data size)
//!  8      4     "WAVE"
//! 12      4     "fmt "
//! 16      4     fmt chunk size (16)
//! 20      2     audio format (1 = PCM)
//! 22      2     channels
//! 24      4     sample rate
//! 28      4     byte rate
//! 32      2     block align
//! 34      2     bits per sample
//! 36      4     "data"
//! 40      4     data size
//! 44      n     samples
//! ```
//!
//! All numeric fields are little-endian.

use tracing::warn;

use super::AudioError;

/// Size of the canonical PCM WAV header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// Bytes of header that follow the RIFF chunk size field.
const RIFF_CHUNK_OVERHEAD: u32 = (WAV_HEADER_SIZE - 8) as u32;

/// Size of the `fmt ` chunk body for plain PCM.
const FMT_CHUNK_SIZE: u32 = 16;

/// Format tag for uncompressed linear PCM.
const FORMAT_PCM: u16 = 1;

/// Sample layout of a PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    /// Samples per second
    pub sample_rate: u32,
    /// Interleaved channel count
    pub channels: u16,
    /// Bits per sample, a multiple of 8
    pub bits_per_sample: u16,
}

impl AudioFormat {
    /// Layout of Gemini TTS output: 24 kHz, mono, 16-bit signed little-endian.
    pub const GEMINI_PCM: AudioFormat = AudioFormat {
        sample_rate: 24_000,
        channels: 1,
        bits_per_sample: 16,
    };

    /// Bytes per frame across all channels, or `None` if it overflows `u16`.
    pub fn block_align(&self) -> Option<u16> {
        self.channels.checked_mul(self.bits_per_sample / 8)
    }

    /// Bytes per second of audio, or `None` if it overflows `u32`.
    pub fn byte_rate(&self) -> Option<u32> {
        self.block_align()
            .and_then(|align| self.sample_rate.checked_mul(u32::from(align)))
    }

    fn invalid(&self) -> AudioError {
        AudioError::InvalidFormat {
            sample_rate: self.sample_rate,
            channels: self.channels,
            bits_per_sample: self.bits_per_sample,
        }
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self::GEMINI_PCM
    }
}

/// Returns the RIFF data size field and the total container length for
/// `data_len` sample bytes.
fn container_sizes(data_len: usize) -> Result<(u32, usize), AudioError> {
    let data_size = u32::try_from(data_len)
        .ok()
        .filter(|size| size.checked_add(RIFF_CHUNK_OVERHEAD).is_some())
        .ok_or(AudioError::Allocation {
            requested: data_len,
        })?;
    let total_size = WAV_HEADER_SIZE
        .checked_add(data_len)
        .ok_or(AudioError::Allocation {
            requested: data_len,
        })?;
    Ok((data_size, total_size))
}

/// Wraps raw PCM bytes in a WAV container.
///
/// The returned buffer is exactly `44 + samples.len()` bytes. Sample bytes are
/// copied verbatim after the header. A length that is not a multiple of the
/// block alignment is still declared as-is in the data size field; it is
/// logged but not rejected.
///
/// # Errors
///
/// Returns [`AudioError::Allocation`] when the data does not fit the 32-bit
/// RIFF size fields or the output buffer cannot be reserved, and
/// [`AudioError::InvalidFormat`] when the derived block alignment or byte
/// rate does not fit its header field.
///
/// # Example
///
/// ```rust
/// use speechwav::core::audio::{AudioFormat, encode_wav};
///
/// let wav = encode_wav(&[0x00, 0x01, 0xFF, 0x00], AudioFormat::GEMINI_PCM).unwrap();
/// assert_eq!(wav.len(), 48);
/// assert_eq!(&wav[0..4], b"RIFF");
/// ```
pub fn encode_wav(samples: &[u8], format: AudioFormat) -> Result<Vec<u8>, AudioError> {
    let (data_size, total_size) = container_sizes(samples.len())?;
    let block_align = format.block_align().ok_or_else(|| format.invalid())?;
    let byte_rate = format.byte_rate().ok_or_else(|| format.invalid())?;

    if block_align > 0 && samples.len() % usize::from(block_align) != 0 {
        warn!(
            data_size = samples.len(),
            block_align, "PCM data ends with a partial frame; declaring it unchanged"
        );
    }

    let mut wav = Vec::new();
    wav.try_reserve_exact(total_size)
        .map_err(|_| AudioError::Allocation {
            requested: total_size,
        })?;

    // RIFF descriptor
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(RIFF_CHUNK_OVERHEAD + data_size).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    // fmt chunk
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
    wav.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    wav.extend_from_slice(&format.channels.to_le_bytes());
    wav.extend_from_slice(&format.sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&format.bits_per_sample.to_le_bytes());

    // data chunk
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    wav.extend_from_slice(samples);

    debug_assert_eq!(wav.len(), total_size);
    Ok(wav)
}

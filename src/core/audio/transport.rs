//! Base64 transport decoding for provider audio payloads.
//!
//! Speech providers ship binary audio inside JSON as standard base64 text
//! (alphabet `A-Z a-z 0-9 + /`, `=` padding, length a multiple of 4). This
//! module turns that text back into raw bytes and nothing else.

use base64::Engine;

/// Error returned when a transport payload is not valid padded base64.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid base64 audio payload: {0}")]
pub struct DecodeError(#[from] pub base64::DecodeError);

/// Decodes a standard, padded base64 payload into raw bytes.
///
/// Decoding is all-or-nothing: an invalid symbol, a length that is not a
/// multiple of 4 or misplaced padding yields [`DecodeError`] and no bytes.
///
/// # Example
///
/// ```rust
/// use speechwav::core::audio::decode_base64;
///
/// assert_eq!(decode_base64("QUJD").unwrap(), b"ABC");
/// assert!(decode_base64("abc$").is_err());
/// ```
pub fn decode_base64(payload: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_payload() {
        let bytes = decode_base64("").unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_decode_unpadded_group() {
        assert_eq!(decode_base64("QUJD").unwrap(), vec![0x41, 0x42, 0x43]);
    }

    #[test]
    fn test_decode_padding_lengths() {
        // 8 symbols, no padding -> 6 bytes
        assert_eq!(decode_base64("QUJDREVG").unwrap().len(), 6);
        // one pad -> 3n - 1
        assert_eq!(decode_base64("QUJDREU=").unwrap(), b"ABCDE");
        // two pads -> 3n - 2
        assert_eq!(decode_base64("QUJDRA==").unwrap(), b"ABCD");
    }

    #[test]
    fn test_decoded_len_follows_group_count() {
        for (payload, padding) in [("QUJD", 0), ("QUJDREU=", 1), ("QUJDRA==", 2), ("", 0)] {
            let decoded = decode_base64(payload).unwrap();
            let groups = payload.len() / 4;
            assert_eq!(decoded.len(), groups * 3 - padding);
        }
    }

    #[test]
    fn test_decode_rejects_invalid_symbol() {
        let err = decode_base64("abc$").unwrap_err();
        assert!(matches!(err.0, base64::DecodeError::InvalidByte(_, b'$')));
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        assert!(decode_base64("QUJ").is_err());
        assert!(decode_base64("QUJDR").is_err());
    }

    #[test]
    fn test_decode_rejects_misplaced_padding() {
        assert!(decode_base64("QU=D").is_err());
        assert!(decode_base64("=QUJ").is_err());
    }

    #[test]
    fn test_decode_binary_pcm() {
        // 0x00 0x01 0xFF 0x00
        assert_eq!(
            decode_base64("AAH/AA==").unwrap(),
            vec![0x00, 0x01, 0xFF, 0x00]
        );
    }

    #[test]
    fn test_decode_is_deterministic() {
        let payload = "SGVsbG8gV29ybGQ=";
        assert_eq!(decode_base64(payload).unwrap(), decode_base64(payload).unwrap());
        assert_eq!(decode_base64(payload).unwrap(), b"Hello World");
    }
}

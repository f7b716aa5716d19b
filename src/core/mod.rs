pub mod audio;
pub mod clips;
pub mod speech;
pub mod tts;
pub mod voices;

// Re-export commonly used types for convenience
pub use audio::{
    AudioError, AudioFormat, DecodeError, decode_base64, encode_wav, pcm_payload_to_wav,
};
pub use clips::{ClipHandle, ClipSlot, ClipStore};
pub use speech::{SpeechError, generate_speech};
pub use tts::{
    GeminiTTS, GeminiTTSConfig, SpeechSynthesizer, SynthesizedAudio, TTSError, TTSResult,
    create_speech_client,
};
pub use voices::{DEFAULT_VOICE, Voice, available_voices, find_voice};

//! Gemini text-to-speech configuration.

use std::time::Duration;

/// Default Generative Language API host
pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default speech generation model
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Default request timeout in seconds
pub const GEMINI_DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for a single Gemini TTS client.
///
/// The API key is passed explicitly on every construction; there is no
/// process-wide client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiTTSConfig {
    /// API key sent as `x-goog-api-key`
    pub api_key: String,
    /// Model name, e.g. `gemini-2.5-flash-preview-tts`
    pub model: String,
    /// API host without trailing path
    pub base_url: String,
    /// Whole-request timeout
    pub request_timeout: Duration,
}

impl GeminiTTSConfig {
    /// Creates a config with default model, host and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: GEMINI_DEFAULT_MODEL.to_string(),
            base_url: GEMINI_DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(GEMINI_DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Full URL of the `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = GeminiTTSConfig::new("key");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.model, GEMINI_DEFAULT_MODEL);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_endpoint() {
        let config = GeminiTTSConfig::new("key");
        assert_eq!(
            config.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-tts:generateContent"
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = GeminiTTSConfig {
            base_url: "http://127.0.0.1:9000/".to_string(),
            model: "test-model".to_string(),
            ..GeminiTTSConfig::new("key")
        };
        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:9000/v1beta/models/test-model:generateContent"
        );
    }
}

//! Gemini `generateContent` request builder and TTS provider.
//!
//! Gemini returns speech as inline data in a regular content response:
//!
//! ```json
//! {
//!   "candidates": [{
//!     "content": {
//!       "parts": [{
//!         "inlineData": { "mimeType": "audio/L16;codec=pcm;rate=24000", "data": "<base64>" }
//!       }]
//!     }
//!   }]
//! }
//! ```
//!
//! The provider only extracts the base64 payload. It does not decode it.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use super::config::GeminiTTSConfig;
use crate::core::tts::base::{SpeechSynthesizer, SynthesizedAudio, TTSError, TTSResult};

/// Message used when a response carries no audio part
pub const NO_AUDIO_MESSAGE: &str =
    "API did not return audio data. The response may have been blocked.";

/// Builds `generateContent` requests that ask for an AUDIO response.
#[derive(Debug, Clone)]
pub struct GeminiRequestBuilder {
    config: GeminiTTSConfig,
}

impl GeminiRequestBuilder {
    pub fn new(config: GeminiTTSConfig) -> Self {
        Self { config }
    }

    /// JSON body with the text as a single content part and the prebuilt voice.
    pub fn build_request_body(&self, text: &str, voice: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "parts": [{ "text": text }]
            }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": { "voiceName": voice }
                    }
                }
            }
        })
    }

    pub fn build_http_request(
        &self,
        client: &reqwest::Client,
        text: &str,
        voice: &str,
    ) -> reqwest::RequestBuilder {
        client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&self.build_request_body(text, voice))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: Option<String>,
    data: Option<String>,
}

/// Pulls the first candidate's first inline audio part out of a response body.
pub(crate) fn extract_audio(response_text: &str) -> TTSResult<SynthesizedAudio> {
    let response: GenerateContentResponse = serde_json::from_str(response_text)
        .map_err(|e| TTSError::ProviderError(format!("Failed to parse JSON response: {e}")))?;

    let inline = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.inline_data);

    match inline {
        Some(InlineData {
            data: Some(payload),
            mime_type,
        }) if !payload.is_empty() => Ok(SynthesizedAudio { payload, mime_type }),
        _ => Err(TTSError::NoAudio(NO_AUDIO_MESSAGE.to_string())),
    }
}

/// Gemini speech provider.
///
/// Construct one per request with [`GeminiTTS::new`]; each instance owns its
/// HTTP client and credentials.
pub struct GeminiTTS {
    config: GeminiTTSConfig,
    http_client: reqwest::Client,
}

impl GeminiTTS {
    /// Creates a provider from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TTSError::InvalidConfiguration`] when the API key is empty or
    /// the HTTP client cannot be built.
    pub fn new(config: GeminiTTSConfig) -> TTSResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(TTSError::InvalidConfiguration(
                "Gemini API key is required".to_string(),
            ));
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                TTSError::InvalidConfiguration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &GeminiTTSConfig {
        &self.config
    }
}

#[async_trait]
impl SpeechSynthesizer for GeminiTTS {
    async fn synthesize(&self, text: &str, voice: &str) -> TTSResult<SynthesizedAudio> {
        let request = GeminiRequestBuilder::new(self.config.clone()).build_http_request(
            &self.http_client,
            text,
            voice,
        );

        info!(
            model = %self.config.model,
            voice,
            text_len = text.len(),
            "Requesting Gemini speech synthesis"
        );

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TTSError::ProviderError(format!(
                "Gemini TTS API error ({status}): {error_body}"
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| TTSError::ProviderError(format!("Failed to read response body: {e}")))?;

        let audio = extract_audio(&response_text)?;
        debug!(
            payload_len = audio.payload.len(),
            mime_type = audio.mime_type.as_deref().unwrap_or("unknown"),
            "Received Gemini audio payload"
        );
        Ok(audio)
    }

    fn get_provider_info(&self) -> serde_json::Value {
        serde_json::json!({
            "provider": "gemini",
            "api_type": "HTTP REST",
            "model": self.config.model,
            "endpoint": self.config.endpoint(),
            "output_format": "LINEAR16",
            "sample_rate": 24000,
            "channels": 1,
        })
    }
}

//! Gemini provider tests against a wiremock server.
//!
//! No network access or API key is needed.

use serde_json::json;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

use speechwav::core::tts::gemini::NO_AUDIO_MESSAGE;
use speechwav::core::tts::{GeminiTTS, GeminiTTSConfig, SpeechSynthesizer, TTSError};
use speechwav::generate_speech;

const MODEL_PATH: &str = "/v1beta/models/test-model:generateContent";

fn test_config(base_url: &str) -> GeminiTTSConfig {
    GeminiTTSConfig {
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
        base_url: base_url.to_string(),
        request_timeout: Duration::from_secs(5),
    }
}

fn audio_response(data: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{
                    "inlineData": {
                        "mimeType": "audio/L16;codec=pcm;rate=24000",
                        "data": data
                    }
                }]
            },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_synthesize_sends_voice_and_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "Hello everyone, how are you" }] }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Charon" } }
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(audio_response("AAH/AA==")))
        .expect(1)
        .mount(&server)
        .await;

    let tts = GeminiTTS::new(test_config(&server.uri())).unwrap();
    let audio = tts
        .synthesize("Hello everyone, how are you", "Charon")
        .await
        .unwrap();

    assert_eq!(audio.payload, "AAH/AA==");
    assert_eq!(
        audio.mime_type.as_deref(),
        Some("audio/L16;codec=pcm;rate=24000")
    );
}

#[tokio::test]
async fn test_synthesize_blocked_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        })))
        .mount(&server)
        .await;

    let tts = GeminiTTS::new(test_config(&server.uri())).unwrap();
    match tts.synthesize("Hello", "Kore").await {
        Err(TTSError::NoAudio(msg)) => assert_eq!(msg, NO_AUDIO_MESSAGE),
        other => panic!("Expected NoAudio, got {:?}", other),
    }
}

#[tokio::test]
async fn test_synthesize_api_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let tts = GeminiTTS::new(test_config(&server.uri())).unwrap();
    match tts.synthesize("Hello", "Kore").await {
        Err(TTSError::ProviderError(msg)) => {
            assert!(msg.contains("403"));
            assert!(msg.contains("API key not valid"));
        }
        other => panic!("Expected ProviderError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_synthesize_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(audio_response("AAAA"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = GeminiTTSConfig {
        request_timeout: Duration::from_millis(50),
        ..test_config(&server.uri())
    };
    let tts = GeminiTTS::new(config).unwrap();
    match tts.synthesize("Hello", "Kore").await {
        Err(TTSError::TimeoutError(_)) => {}
        other => panic!("Expected TimeoutError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_speech_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(audio_response("AAH/AA==")))
        .mount(&server)
        .await;

    let tts = GeminiTTS::new(test_config(&server.uri())).unwrap();
    let wav = generate_speech(&tts, "Hello", "Zephyr").await.unwrap();

    assert_eq!(wav.len(), 48);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 4);
    assert_eq!(&wav[44..], &[0x00, 0x01, 0xFF, 0x00]);
}

use super::ServerConfig;

/// Validate a merged configuration
///
/// Checks that:
/// - the model name is non-empty
/// - the Gemini base URL is an http(s) URL
/// - the request timeout, the text length limit and the session limit are positive
///
/// A missing API key is accepted; it is reported when a request needs it.
pub fn validate_config(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.gemini_model.trim().is_empty() {
        return Err("GEMINI_TTS_MODEL cannot be empty".into());
    }

    let base_url = config.gemini_base_url.as_str();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(format!("GEMINI_BASE_URL must be an http(s) URL, got: {base_url}").into());
    }

    if config.gemini_timeout_seconds == 0 {
        return Err("GEMINI_TIMEOUT_SECONDS must be greater than zero".into());
    }

    if config.max_text_length == 0 {
        return Err("MAX_TEXT_LENGTH must be greater than zero".into());
    }

    if config.max_sessions == 0 {
        return Err("MAX_SESSIONS must be greater than zero".into());
    }

    Ok(())
}

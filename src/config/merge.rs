use std::env;

use super::ServerConfig;
use super::env::api_key_from_env;
use super::yaml::YamlConfig;
use crate::core::tts::gemini::{
    GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_MODEL, GEMINI_DEFAULT_TIMEOUT_SECS,
};

/// Default maximum number of characters accepted per synthesis request
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 5000;

/// Default number of sessions that may hold a clip at once
pub const DEFAULT_MAX_SESSIONS: usize = 64;

/// Merge YAML configuration with environment variables
///
/// Priority order (highest to lowest):
/// 1. YAML configuration values
/// 2. Environment variables
/// 3. Default values
///
/// # Arguments
/// * `yaml_config` - Optional YAML configuration to use as overrides
pub fn merge_config(
    yaml_config: Option<YamlConfig>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let yaml = yaml_config.unwrap_or_default();

    // Helper macro to get value with priority: YAML > ENV > Default
    macro_rules! get_value {
        ($env_var:expr, $yaml_value:expr, $default:expr) => {
            $yaml_value
                .or_else(|| env::var($env_var).ok())
                .unwrap_or_else(|| $default.to_string())
        };
    }

    // Helper macro for parsed numeric values: YAML > ENV > Default
    macro_rules! get_parsed {
        ($env_var:expr, $yaml_value:expr, $ty:ty, $default:expr) => {
            if let Some(value) = $yaml_value {
                value
            } else if let Ok(raw) = env::var($env_var) {
                raw.parse::<$ty>()
                    .map_err(|e| format!("Invalid {} environment variable: {e}", $env_var))?
            } else {
                $default
            }
        };
    }

    // Server configuration
    let host = get_value!(
        "HOST",
        yaml.server.as_ref().and_then(|s| s.host.clone()),
        "0.0.0.0"
    );
    let port = get_parsed!(
        "PORT",
        yaml.server.as_ref().and_then(|s| s.port),
        u16,
        3001
    );

    // Gemini configuration
    let gemini_api_key = yaml
        .gemini
        .as_ref()
        .and_then(|g| g.api_key.clone())
        .or_else(api_key_from_env);
    let gemini_model = get_value!(
        "GEMINI_TTS_MODEL",
        yaml.gemini.as_ref().and_then(|g| g.model.clone()),
        GEMINI_DEFAULT_MODEL
    );
    let gemini_base_url = get_value!(
        "GEMINI_BASE_URL",
        yaml.gemini.as_ref().and_then(|g| g.base_url.clone()),
        GEMINI_DEFAULT_BASE_URL
    );
    let gemini_timeout_seconds = get_parsed!(
        "GEMINI_TIMEOUT_SECONDS",
        yaml.gemini.as_ref().and_then(|g| g.timeout_seconds),
        u64,
        GEMINI_DEFAULT_TIMEOUT_SECS
    );

    // Limits
    let max_text_length = get_parsed!(
        "MAX_TEXT_LENGTH",
        yaml.limits.as_ref().and_then(|l| l.max_text_length),
        usize,
        DEFAULT_MAX_TEXT_LENGTH
    );
    let max_sessions = get_parsed!(
        "MAX_SESSIONS",
        yaml.limits.as_ref().and_then(|l| l.max_sessions),
        usize,
        DEFAULT_MAX_SESSIONS
    );

    Ok(ServerConfig {
        host,
        port,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        gemini_timeout_seconds,
        max_text_length,
        max_sessions,
    })
}

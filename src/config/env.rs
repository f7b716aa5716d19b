use std::env;

use super::ServerConfig;
use super::merge::merge_config;
use super::validation::validate_config;

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads configuration from environment variables, with sensible defaults.
    /// Also loads from .env file if present using dotenvy.
    ///
    /// The Gemini API key is read from `GEMINI_API_KEY`, falling back to
    /// `API_KEY`. A missing key is not an error here; requests report it.
    ///
    /// # Errors
    /// Returns an error if a variable is malformed or validation fails.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let config = merge_config(None)?;
        validate_config(&config)?;
        Ok(config)
    }
}

/// Reads the Gemini API key from the environment
///
/// Blank values are skipped so an empty `GEMINI_API_KEY` still falls back
/// to `API_KEY`.
pub(super) fn api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "API_KEY"]
        .into_iter()
        .filter_map(|var| env::var(var).ok())
        .find(|key| !key.trim().is_empty())
}

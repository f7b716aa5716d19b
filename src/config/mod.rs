//! Configuration module for the speechwav server
//!
//! Configuration comes from environment variables and, optionally, a YAML file.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//!
//! # Example
//! ```rust,no_run
//! use speechwav::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable fallbacks
//! let config = ServerConfig::from_file(&PathBuf::from("config.yaml"))?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::core::tts::GeminiTTSConfig;

mod env;
mod merge;
mod validation;
mod yaml;

pub use yaml::YamlConfig;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Gemini speech provider
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout_seconds: u64,

    // Request limits
    pub max_text_length: usize,
    pub max_sessions: usize,
}

impl ServerConfig {
    /// Load configuration from a YAML file with environment variable fallbacks
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables
    /// 3. Default values
    ///
    /// # Errors
    /// Returns an error if the YAML file cannot be read or parsed, an
    /// environment variable is malformed, or validation fails.
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let config = merge::merge_config(Some(yaml_config))?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the Gemini API key
    ///
    /// # Returns
    /// * `Result<String, String>` - The API key, or an error message when it is not configured
    pub fn get_api_key(&self) -> Result<String, String> {
        self.gemini_api_key
            .as_ref()
            .filter(|key| !key.trim().is_empty())
            .cloned()
            .ok_or_else(|| "Gemini API key not configured in server environment".to_string())
    }

    /// Build a per-request Gemini client configuration
    pub fn gemini_config(&self) -> Result<GeminiTTSConfig, String> {
        Ok(GeminiTTSConfig {
            api_key: self.get_api_key()?,
            model: self.gemini_model.clone(),
            base_url: self.gemini_base_url.clone(),
            request_timeout: Duration::from_secs(self.gemini_timeout_seconds),
        })
    }
}

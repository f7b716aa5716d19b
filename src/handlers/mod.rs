//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `voices` - Voice listing endpoint
//! - `speak` - Text-to-speech returning a WAV file
//! - `clips` - Stored clips with per-session lifetime

pub mod api;
pub mod clips;
pub mod speak;
pub mod voices;

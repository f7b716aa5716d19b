use axum::response::Json;

use crate::core::voices::{Voice, available_voices};

/// Lists the prebuilt voices users can pick from
pub async fn list_voices() -> Json<&'static [Voice]> {
    Json(available_voices())
}

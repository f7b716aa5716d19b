use axum::{http::StatusCode, response::Json};
use serde_json::{Value, json};

/// Liveness check for `GET /`
///
/// Reports only that the process is serving requests; it does not contact
/// the speech provider.
pub async fn health_check() -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "OK"
    })))
}

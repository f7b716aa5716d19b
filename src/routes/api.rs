use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{api, clips, speak, voices};
use crate::state::AppState;
use std::sync::Arc;

pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(api::health_check))
        .route("/voices", get(voices::list_voices))
        .route("/speak", post(speak::speak_handler))
        .route("/clips", post(clips::create_clip))
        .route("/clips/{id}", get(clips::get_clip).delete(clips::delete_clip))
        .layer(TraceLayer::new_for_http())
}

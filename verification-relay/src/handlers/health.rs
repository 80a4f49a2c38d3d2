use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::observability::render_metrics;

use crate::startup::AppState;

/// Liveness plus whether the SMS provider can actually be used.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "verification-relay",
            "version": env!("CARGO_PKG_VERSION"),
            "sms_provider": {
                "name": state.sms_provider.name(),
                "configured": state.sms_provider.is_configured()
            }
        })),
    )
}

pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        render_metrics(),
    )
}

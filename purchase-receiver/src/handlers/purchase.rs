use axum::{extract::State, Json};
use chrono::Local;
use service_core::error::AppError;
use service_core::extract::JsonPayload;

use crate::models::{PurchaseAck, PurchaseEvent};
use crate::startup::AppState;

/// Logs a purchase event and acknowledges it with the server time.
///
/// The body is parsed whatever content type the client declares.
#[tracing::instrument(skip(state, event))]
pub async fn receive_purchase(
    State(state): State<AppState>,
    JsonPayload(event): JsonPayload<PurchaseEvent>,
) -> Result<Json<PurchaseAck>, AppError> {
    let ack = PurchaseAck::received(&Local::now());

    state.sink.record(&event, &ack.timestamp).await?;

    tracing::info!(
        service = %event.service,
        duration = %event.duration,
        status = %event.status,
        "Purchase notification received"
    );

    Ok(Json(ack))
}

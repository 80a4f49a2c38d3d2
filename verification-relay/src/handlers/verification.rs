use anyhow::anyhow;
use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

use crate::models::{OneTimeCode, PhoneNumber, VerificationRequest, VerificationResponse};
use crate::services::record_provider_call;
use crate::startup::AppState;

pub const CREDENTIALS_MISSING: &str = "Server configuration error (MSG91 credentials)";

/// Sends a fresh one-time code to the caller's phone through the SMS provider.
#[tracing::instrument(skip(state, request))]
pub async fn send_verification(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerificationRequest>,
) -> Result<Json<VerificationResponse>, AppError> {
    let raw = request.phone_number.as_deref().unwrap_or_default();
    let phone = PhoneNumber::normalize(raw, &state.config.country_prefix)
        .map_err(|e| AppError::BadRequest(e.into()))?;

    tracing::info!(phone = %phone.masked(), "Attempting to send verification");

    if !state.sms_provider.is_configured() {
        tracing::error!("Cannot send SMS, MSG91 credentials missing");
        return Err(AppError::ConfigError(anyhow!(CREDENTIALS_MISSING)));
    }

    let code = OneTimeCode::generate();
    let provider = state.sms_provider.name();

    match state.sms_provider.send_otp(&phone, &code).await {
        Ok(response) => {
            record_provider_call(provider, "success");
            tracing::info!(
                phone = %phone.masked(),
                request_id = ?response.request_id,
                "Verification code sent"
            );
            Ok(Json(VerificationResponse::sent()))
        }
        Err(e) => {
            record_provider_call(provider, "failure");
            tracing::error!(phone = %phone.masked(), error = %e, "Error sending SMS");
            Err(AppError::ProviderError(format!("Failed to send SMS: {}", e)))
        }
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MISSING_PHONE_NUMBER: &str = "Missing 'phoneNumber' field";

#[derive(Debug, Deserialize, Validate)]
pub struct VerificationRequest {
    #[serde(rename = "phoneNumber", default)]
    #[validate(
        required(message = "Missing 'phoneNumber' field"),
        length(min = 1, message = "Missing 'phoneNumber' field")
    )]
    pub phone_number: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerificationResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl VerificationResponse {
    pub fn sent() -> Self {
        Self {
            status: "success",
            message: "Verification code sent successfully",
        }
    }
}

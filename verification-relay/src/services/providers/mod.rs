pub mod msg91;

use crate::models::{OneTimeCode, PhoneNumber};
use async_trait::async_trait;
use thiserror::Error;

pub use msg91::Msg91Provider;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("MSG91 credentials are not configured")]
    NotConfigured,

    /// The request never got an answer.
    #[error("{0}")]
    Connection(String),

    /// The provider answered but did not accept the message.
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Provider reference for the accepted message, when it returns one.
    pub request_id: Option<String>,
}

#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Delivers `code` to `to` through the provider's OTP template.
    async fn send_otp(
        &self,
        to: &PhoneNumber,
        code: &OneTimeCode,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Whether credentials are present; unconfigured providers must not be called.
    fn is_configured(&self) -> bool;

    fn name(&self) -> &'static str;
}

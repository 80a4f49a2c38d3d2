use super::{ProviderError, ProviderResponse, SmsProvider};
use crate::config::Msg91Config;
use crate::models::{OneTimeCode, PhoneNumber};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// MSG91 flow API client.
///
/// Uses the client's default timeouts; failed sends are not retried.
#[derive(Clone)]
pub struct Msg91Provider {
    config: Msg91Config,
    client: Client,
}

#[derive(Debug, Serialize)]
struct FlowRequest<'a> {
    template_id: &'a str,
    sender: &'a str,
    /// "0" disables MSG91 link shortening.
    short_url: &'a str,
    mobiles: &'a str,
    /// Template variable holding the code.
    #[serde(rename = "VAR1")]
    var1: &'a str,
}

#[derive(Debug, Deserialize)]
struct FlowResponse {
    #[serde(rename = "type", default)]
    response_type: Option<String>,
    #[serde(default)]
    message: Option<serde_json::Value>,
}

impl FlowResponse {
    fn is_success(&self) -> bool {
        self.response_type.as_deref() == Some("success")
    }

    fn message_text(&self) -> Option<String> {
        match &self.message {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

impl Msg91Provider {
    pub fn new(config: Msg91Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl SmsProvider for Msg91Provider {
    async fn send_otp(
        &self,
        to: &PhoneNumber,
        code: &OneTimeCode,
    ) -> Result<ProviderResponse, ProviderError> {
        let (Some(api_key), Some(template_id)) =
            (self.config.api_key.as_ref(), self.config.template_id.as_deref())
        else {
            return Err(ProviderError::NotConfigured);
        };

        let request = FlowRequest {
            template_id,
            sender: &self.config.sender_id,
            short_url: "0",
            mobiles: to.as_str(),
            var1: code.as_str(),
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .header("authkey", api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        let flow: FlowResponse = serde_json::from_slice(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        if status != StatusCode::OK || !flow.is_success() {
            tracing::warn!(
                status = %status,
                response_type = ?flow.response_type,
                "MSG91 rejected the message"
            );
            return Err(ProviderError::Rejected(
                flow.message_text()
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        tracing::info!(to = %to.masked(), "SMS sent successfully via MSG91");

        Ok(ProviderResponse {
            request_id: flow.message_text(),
        })
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn name(&self) -> &'static str {
        "msg91"
    }
}

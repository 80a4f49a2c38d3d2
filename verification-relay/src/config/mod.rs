use secrecy::Secret;
use service_core::config::{env_or, optional_env, ServerConfig};
use service_core::error::AppError;

pub const DEFAULT_PORT: u16 = 5001;

/// Six-character sender id registered with MSG91.
pub const MSG91_SENDER_ID: &str = "FLEXIP";
pub const MSG91_FLOW_URL: &str = "https://control.msg91.com/api/v5/flow/";
pub const DEFAULT_COUNTRY_PREFIX: &str = "91";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub server: ServerConfig,
    pub log_level: String,
    pub service_name: String,
    /// Dialing prefix stripped from incoming numbers.
    pub country_prefix: String,
    pub msg91: Msg91Config,
}

#[derive(Debug, Clone)]
pub struct Msg91Config {
    pub api_key: Option<Secret<String>>,
    pub template_id: Option<String>,
    pub sender_id: String,
    pub api_url: String,
}

impl Msg91Config {
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.template_id.is_some()
    }
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let server = ServerConfig::load("RELAY", DEFAULT_PORT)?;

        Ok(Self {
            server,
            log_level: env_or("RELAY_LOG_LEVEL", "info"),
            service_name: "verification-relay".to_string(),
            country_prefix: env_or("RELAY_COUNTRY_PREFIX", DEFAULT_COUNTRY_PREFIX),
            msg91: Msg91Config {
                api_key: optional_env("MSG91_API_KEY").map(Secret::new),
                template_id: optional_env("MSG91_TEMPLATE_ID"),
                sender_id: MSG91_SENDER_ID.to_string(),
                api_url: env_or("MSG91_API_URL", MSG91_FLOW_URL),
            },
        })
    }
}

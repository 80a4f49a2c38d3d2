use service_core::config::{env_or, ServerConfig};
use service_core::error::AppError;

pub const DEFAULT_PORT: u16 = 8765;

#[derive(Debug, Clone)]
pub struct ReceiverConfig {
    pub server: ServerConfig,
    pub log_level: String,
    pub service_name: String,
}

impl ReceiverConfig {
    /// `RECEIVER_HOST`, `RECEIVER_PORT` and `RECEIVER_LOG_LEVEL`, with defaults.
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            server: ServerConfig::load("RECEIVER", DEFAULT_PORT)?,
            log_level: env_or("RECEIVER_LOG_LEVEL", "info"),
            service_name: "purchase-receiver".to_string(),
        })
    }
}

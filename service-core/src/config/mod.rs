use crate::error::AppError;
use config::{Config as Cfg, Environment};
use serde::Deserialize;
use std::env;
use std::net::{IpAddr, SocketAddr};

/// Listener settings shared by every service.
///
/// Values come from `<PREFIX>_HOST` / `<PREFIX>_PORT` (after loading `.env`),
/// falling back to all interfaces and the service's default port.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn load(prefix: &str, default_port: u16) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", i64::from(default_port))?
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Reads an optional variable, treating an empty value as unset.
pub fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Reads a variable with a fallback used when it is unset or empty.
pub fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

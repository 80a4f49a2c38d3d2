#![allow(dead_code)]

use secrecy::Secret;
use service_core::config::ServerConfig;
use verification_relay::config::{Msg91Config, RelayConfig, MSG91_SENDER_ID};
use verification_relay::startup::Application;
use wiremock::MockServer;

pub const TEST_AUTH_KEY: &str = "test-auth-key";
pub const TEST_TEMPLATE_ID: &str = "test-template";
pub const FLOW_PATH: &str = "/api/v5/flow/";

pub struct TestApp {
    pub http_address: String,
    pub http_port: u16,
}

impl TestApp {
    pub fn verification_url(&self) -> String {
        format!("{}/send-verification", self.http_address)
    }

    pub async fn post_verification(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(self.verification_url())
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Credentials pointing at the mock provider.
pub fn configured_msg91(provider: &MockServer) -> Msg91Config {
    msg91_at(format!("{}{}", provider.uri(), FLOW_PATH))
}

pub fn msg91_at(api_url: String) -> Msg91Config {
    Msg91Config {
        api_key: Some(Secret::new(TEST_AUTH_KEY.to_string())),
        template_id: Some(TEST_TEMPLATE_ID.to_string()),
        sender_id: MSG91_SENDER_ID.to_string(),
        api_url,
    }
}

/// No credentials, as when the environment variables are unset.
pub fn unconfigured_msg91(provider: &MockServer) -> Msg91Config {
    Msg91Config {
        api_key: None,
        template_id: None,
        ..configured_msg91(provider)
    }
}

impl TestApp {
    pub async fn spawn(msg91: Msg91Config) -> Self {
        let config = RelayConfig {
            server: ServerConfig {
                host: "127.0.0.1".parse().unwrap(),
                port: 0, // Random port
            },
            log_level: "debug".to_string(),
            service_name: "verification-relay-test".to_string(),
            country_prefix: "91".to_string(),
            msg91,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let http_port = app.port();
        let http_address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            http_address,
            http_port,
        }
    }
}

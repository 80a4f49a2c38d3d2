#![allow(dead_code)]

use async_trait::async_trait;
use purchase_receiver::config::ReceiverConfig;
use purchase_receiver::models::PurchaseEvent;
use purchase_receiver::services::PurchaseSink;
use purchase_receiver::startup::Application;
use service_core::config::ServerConfig;
use std::sync::{Arc, Mutex};

pub struct TestApp {
    pub http_address: String,
    pub http_port: u16,
}

/// Keeps rendered records in memory instead of printing them.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn records(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl PurchaseSink for RecordingSink {
    async fn record(&self, event: &PurchaseEvent, received_at: &str) -> std::io::Result<()> {
        self.records
            .lock()
            .unwrap()
            .push(event.render_record(received_at));
        Ok(())
    }
}

/// Fails every write, as a closed stdout would.
pub struct BrokenSink;

#[async_trait]
impl PurchaseSink for BrokenSink {
    async fn record(&self, _event: &PurchaseEvent, _received_at: &str) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdout is closed",
        ))
    }
}

fn test_config() -> ReceiverConfig {
    ReceiverConfig {
        server: ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0, // Random port
        },
        log_level: "debug".to_string(),
        service_name: "purchase-receiver-test".to_string(),
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_sink(Arc::new(RecordingSink::default())).await
    }

    pub async fn spawn_with_sink(sink: Arc<dyn PurchaseSink>) -> Self {
        let app = Application::build_with_sink(test_config(), sink)
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

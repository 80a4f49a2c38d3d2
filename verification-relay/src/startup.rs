//! Application startup and lifecycle management.

use crate::config::RelayConfig;
use crate::handlers;
use crate::services::{Msg91Provider, SmsProvider};
use axum::http::Method;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use service_core::error::AppError;
use service_core::middleware::{
    http_trace_layer, metrics_middleware, permissive_cors, request_id_middleware,
};
use service_core::shutdown::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: RelayConfig,
    pub sms_provider: Arc<dyn SmsProvider>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/send-verification", post(handlers::send_verification))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .layer(permissive_cors([Method::GET, Method::POST]))
        .layer(from_fn(metrics_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let sms_provider = Msg91Provider::new(config.msg91.clone());
        if !sms_provider.is_configured() {
            // Keep serving; every verification request will answer 500.
            tracing::error!(
                "MSG91 credentials not configured. Please set MSG91_API_KEY and MSG91_TEMPLATE_ID environment variables."
            );
        }

        // Port 0 binds a random port (tests)
        let addr = config.server.socket_addr();
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let router = build_router(AppState {
            config,
            sms_provider: Arc::new(sms_provider),
        });

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!(port = self.port, "Verification relay started");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

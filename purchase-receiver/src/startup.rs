//! Application startup and lifecycle management.

use crate::config::ReceiverConfig;
use crate::handlers;
use crate::services::{PurchaseSink, StdoutSink};
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
    pub sink: Arc<dyn PurchaseSink>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::receive_purchase))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .layer(permissive_cors([Method::POST]))
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
    /// Build the application writing records to stdout.
    pub async fn build(config: ReceiverConfig) -> Result<Self, AppError> {
        Self::build_with_sink(config, Arc::new(StdoutSink::new())).await
    }

    pub async fn build_with_sink(
        config: ReceiverConfig,
        sink: Arc<dyn PurchaseSink>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port (tests)
        let addr = config.server.socket_addr();
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let router = build_router(AppState { sink });

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
        tracing::info!(port = self.port, "Purchase notification server started");
        tracing::info!("Listening for purchase events...");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

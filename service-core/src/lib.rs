//! service-core: Shared infrastructure for the purchase receiver and verification relay.
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod observability;
pub mod shutdown;

pub use async_trait;
pub use axum;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;
pub use tracing;
pub use validator;

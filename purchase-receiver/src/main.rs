use purchase_receiver::config::ReceiverConfig;
use purchase_receiver::startup::Application;
use service_core::error::AppError;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = ReceiverConfig::load()?;

    init_tracing(&config.service_name, &config.log_level);

    if let Err(e) = init_metrics() {
        tracing::warn!("Metrics disabled: {}", e);
    }

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}

use service_core::error::AppError;
use service_core::observability::{init_metrics, init_tracing};
use verification_relay::config::RelayConfig;
use verification_relay::startup::Application;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Credentials are read once here and handed to the application
    let config = RelayConfig::load()?;

    init_tracing(&config.service_name, &config.log_level);

    if let Err(e) = init_metrics() {
        tracing::warn!("Metrics disabled: {}", e);
    }

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}

use ai_language_service::config::LanguageConfig;
use ai_language_service::startup::Application;
use ai_language_service::SERVICE_NAME;
use service_core::metrics::init_metrics;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = LanguageConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );
    init_metrics();

    let app = Application::build(config).await?;
    tracing::info!("Starting {} on port {}", SERVICE_NAME, app.port());
    app.run_until_stopped().await?;

    tracing::info!("{} stopped", SERVICE_NAME);
    Ok(())
}

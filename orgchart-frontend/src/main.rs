use orgchart_frontend::config::get_configuration;
use orgchart_frontend::startup::build_router;
use orgchart_frontend::AppState;
use service_core::observability::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        &configuration.service.name,
        &configuration.service.log_level,
        configuration.service.otlp_endpoint.as_deref(),
    )?;

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );

    info!(
        service = %configuration.service.name,
        version = %configuration.service.version,
        admin_roles = ?configuration.access.admin_roles,
        "Starting org chart frontend"
    );

    let app = build_router(AppState::new(configuration));

    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Listening on {}", address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            anyhow::anyhow!("Server error: {}", e)
        })?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

mod config;
mod telemetry;
mod wiring;

use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;
    telemetry::init_tracing(config.log_format);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(
        addr = %config.listen_addr,
        sheet_configured = config.sheet_id.is_some(),
        credentials_configured = config.service_account_json.is_some(),
        "seldon-omega dashboard api listening"
    );

    axum::serve(listener, wiring::build_app(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

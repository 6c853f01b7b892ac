use dbconfig_service::config::{ProcessEnv, SERVER_PORT, SHUTDOWN_TIMEOUT};
use dbconfig_service::server::wait_for_signal;
use dbconfig_service::service;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting database config service"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], SERVER_PORT));
    service::run(
        addr,
        Arc::new(ProcessEnv),
        wait_for_signal(),
        SHUTDOWN_TIMEOUT,
    )
    .await
}

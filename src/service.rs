//! Service supervision: bind, serve, wait for termination, drain
//!
//! `main` calls [`run`] with the real signal source; tests pass any future.

use crate::config::EnvSource;
use crate::server::{shutdown_channel, ConfigServer};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Run the config server until `termination` resolves, then drain
///
/// `termination` yields the name of the signal that stopped us. Every
/// error returned from here is fatal and has already been logged.
pub async fn run<F>(
    addr: SocketAddr,
    env: Arc<dyn EnvSource>,
    termination: F,
    shutdown_timeout: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = std::io::Result<&'static str>>,
{
    info!(port = addr.port(), "Starting HTTP service");
    let server = match ConfigServer::bind(addr, env).await {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "HTTP listener failed to start");
            return Err(e.into());
        }
    };
    serve_until(server, termination, shutdown_timeout).await
}

/// Serve an already bound server until `termination` resolves, then drain
pub async fn serve_until<F>(
    server: ConfigServer,
    termination: F,
    shutdown_timeout: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = std::io::Result<&'static str>>,
{
    let (shutdown_controller, shutdown_signal) = shutdown_channel();

    match server.local_addr() {
        Ok(local) => info!(addr = %local, "HTTP service listening"),
        Err(e) => {
            error!(error = %e, "HTTP listener failed to start");
            return Err(e.into());
        }
    }

    let handle = server.spawn(shutdown_signal);

    match termination.await {
        Ok(name) => info!(signal = name, "Initiating graceful shutdown"),
        Err(e) => {
            error!(error = %e, "Failed to wait for termination signal");
            return Err(e.into());
        }
    }

    info!(timeout = ?shutdown_timeout, "Shutting down the server");
    shutdown_controller.shutdown();

    if let Err(e) = handle.drain(shutdown_timeout).await {
        error!(error = %e, "HTTP shutdown error");
        return Err(e.into());
    }

    info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;

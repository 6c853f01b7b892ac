//! HTTP listener lifecycle
//!
//! Binding happens up front so a busy port is reported before anything is
//! spawned. Serving runs on its own task and stops when the shutdown signal
//! fires; `ServerHandle::drain` then bounds how long in-flight requests get.

use super::handler::{database_configs, AppState};
use super::shutdown::ShutdownSignal;
use crate::config::{EnvSource, DATABASE_CONFIGS_PATH};
use crate::error::{ServerError, ShutdownError};
use axum::{routing::any, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Build the route table
///
/// Only `/database-configs` is routed, for every method. Anything else
/// falls through to the default 404.
pub fn build_router(env: Arc<dyn EnvSource>) -> Router {
    Router::new()
        .route(DATABASE_CONFIGS_PATH, any(database_configs))
        .with_state(AppState::new(env))
}

/// A bound but not yet serving HTTP server
pub struct ConfigServer {
    listener: TcpListener,
    router: Router,
}

impl ConfigServer {
    /// Bind `addr` and serve the config routes on it
    pub async fn bind(addr: SocketAddr, env: Arc<dyn EnvSource>) -> Result<Self, ServerError> {
        Self::bind_router(addr, build_router(env)).await
    }

    /// Bind `addr` with a caller-supplied router
    pub async fn bind_router(addr: SocketAddr, router: Router) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        Ok(Self { listener, router })
    }

    /// Address the listener is bound to (resolves port 0)
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr().map_err(ServerError::LocalAddr)
    }

    /// Start serving on a background task
    ///
    /// The task stops accepting connections once `signal` fires and
    /// finishes after the in-flight requests complete.
    pub fn spawn(self, signal: ShutdownSignal) -> ServerHandle {
        let Self { listener, router } = self;

        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(signal.wait_owned())
                .await
                .map_err(ServerError::Serve)?;
            info!("HTTP server stopped serving new requests");
            Ok::<(), ServerError>(())
        });

        ServerHandle { task }
    }
}

/// Handle to a running server task
pub struct ServerHandle {
    task: JoinHandle<Result<(), ServerError>>,
}

impl ServerHandle {
    /// Wait up to `deadline` for the server to drain
    ///
    /// Call after the shutdown signal has fired. If requests are still
    /// running at the deadline the serve task is aborted and
    /// `ShutdownError::DeadlineExceeded` is returned.
    pub async fn drain(mut self, deadline: Duration) -> Result<(), ShutdownError> {
        match tokio::time::timeout(deadline, &mut self.task).await {
            Ok(Ok(Ok(()))) => Ok(()),
            Ok(Ok(Err(e))) => Err(ShutdownError::Serve(e)),
            Ok(Err(e)) => Err(ShutdownError::Task(e)),
            Err(_) => {
                warn!(deadline = ?deadline, "Shutdown deadline exceeded, aborting server");
                self.task.abort();
                Err(ShutdownError::DeadlineExceeded(deadline))
            }
        }
    }
}

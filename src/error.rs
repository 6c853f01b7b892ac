//! Error types for the server lifecycle

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinError;

/// Errors from binding or running the HTTP listener
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read listener address: {0}")]
    LocalAddr(#[source] std::io::Error),

    #[error("HTTP serve error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Errors from the graceful shutdown sequence
///
/// All variants are fatal: the process logs them and exits nonzero.
#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("In-flight requests did not finish within {0:?}")]
    DeadlineExceeded(Duration),

    #[error("Server failed while draining: {0}")]
    Serve(#[source] ServerError),

    #[error("Server task failed during shutdown: {0}")]
    Task(#[source] JoinError),
}

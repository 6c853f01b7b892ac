//! Graceful shutdown coordination
//!
//! `main` waits for SIGTERM/SIGINT, flips the shared flag through the
//! `ShutdownController`, and the serve task (holding a `ShutdownSignal`)
//! stops accepting connections and drains.

use tokio::sync::watch;
use tracing::info;

/// Receiving half of the shutdown flag
///
/// Cheap to clone; every clone observes the same flag.
#[derive(Clone)]
pub struct ShutdownSignal {
    receiver: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolve once shutdown has been requested
    ///
    /// A dropped controller also counts as a shutdown request.
    pub async fn wait(&mut self) {
        // wait_for checks the current value first, so a flag raised before
        // we got here is not missed
        let _ = self.receiver.wait_for(|stopped| *stopped).await;
    }

    /// Consume the signal and resolve on shutdown
    ///
    /// Convenient for APIs that take a `'static` future.
    pub async fn wait_owned(mut self) {
        self.wait().await
    }

    /// Check if shutdown was requested (non-blocking)
    pub fn is_shutdown(&self) -> bool {
        *self.receiver.borrow()
    }
}

/// Sending half of the shutdown flag
pub struct ShutdownController {
    sender: watch::Sender<bool>,
}

impl ShutdownController {
    /// Request shutdown; idempotent
    pub fn shutdown(&self) {
        self.sender.send_replace(true);
        info!("Shutdown signal sent");
    }
}

/// Create a new shutdown pair, initially not shut down
pub fn shutdown_channel() -> (ShutdownController, ShutdownSignal) {
    let (sender, receiver) = watch::channel(false);
    (ShutdownController { sender }, ShutdownSignal { receiver })
}

/// Wait for SIGTERM or SIGINT
///
/// Returns the name of the signal received, or an error if the handlers
/// could not be registered.
#[cfg(unix)]
pub async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    let name = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };
    info!(signal = name, "Received termination signal");
    Ok(name)
}

/// Wait for Ctrl+C (non-unix)
#[cfg(not(unix))]
pub async fn wait_for_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    info!(signal = "CTRL_C", "Received termination signal");
    Ok("CTRL_C")
}

//! HTTP server for the database config endpoint
//!
//! - `/database-configs` - Database connection settings from the environment
//!
//! Also provides graceful shutdown handling for SIGTERM/SIGINT.

mod handler;
mod http;
pub mod shutdown;

pub use handler::{database_configs, encode_report, AppState};
pub use http::{build_router, ConfigServer, ServerHandle};
pub use shutdown::{shutdown_channel, wait_for_signal, ShutdownController, ShutdownSignal};

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_tests;

#[cfg(test)]
#[path = "http_test.rs"]
mod http_tests;

#[cfg(test)]
#[path = "shutdown_test.rs"]
mod shutdown_tests;

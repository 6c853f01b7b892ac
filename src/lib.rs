//! Diagnostic HTTP service reporting database connection settings
//!
//! Serves `/database-configs` on port 9090 and shuts down gracefully on
//! SIGTERM/SIGINT.

pub mod config;
pub mod error;
pub mod server;
pub mod service;

//! Service configuration
//!
//! The listening port and shutdown deadline are fixed at compile time.
//! Database settings are read from the environment on every request
//! through an injected [`EnvSource`].

mod env;
mod report;

use std::time::Duration;

pub use env::{
    EnvSource, ProcessEnv, DATABASE_NAME_VAR, HOST_NAME_VAR, PASSWORD_VAR, PORT_VAR, USERNAME_VAR,
};
pub use report::DatabaseConfigReport;

#[cfg(test)]
pub use env::MockEnv;

/// Port the config endpoint listens on (all interfaces)
pub const SERVER_PORT: u16 = 9090;

/// How long in-flight requests get to finish after a termination signal
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Route serving the database configuration report
pub const DATABASE_CONFIGS_PATH: &str = "/database-configs";

#[cfg(test)]
#[path = "report_test.rs"]
mod report_tests;

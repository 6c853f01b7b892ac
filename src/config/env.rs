//! Environment abstraction for testable configuration lookups
//!
//! Production code uses `ProcessEnv` which delegates to `std::env::var`.
//! Tests use `MockEnv` so they never touch the real process environment.

pub const HOST_NAME_VAR: &str = "HOST_NAME";
pub const PORT_VAR: &str = "PORT";
pub const USERNAME_VAR: &str = "USERNAME";
pub const PASSWORD_VAR: &str = "PASSWORD";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

/// Trait for reading configuration variables
///
/// Injected via `AppState` so the handler never reads global state directly.
pub trait EnvSource: Send + Sync {
    /// Returns the value of `key`, or `None` when it is unset
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment
///
/// Values that are not valid UTF-8 are decoded lossily (invalid bytes
/// become U+FFFD), so a set variable is never reported as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// In-memory environment for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl EnvSource for MockEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_env_missing_var_is_none() {
        let env = ProcessEnv;
        assert_eq!(env.var("DBCONFIG_SERVICE_TEST_DEFINITELY_UNSET"), None);
    }

    #[test]
    fn test_process_env_reads_existing_var() {
        // PATH is present in any environment cargo test runs in
        let env = ProcessEnv;
        assert_eq!(env.var("PATH"), std::env::var("PATH").ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_process_env_non_utf8_value_is_set() {
        use crate::config::DatabaseConfigReport;
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        std::env::set_var(PASSWORD_VAR, OsString::from_vec(b"s\xffe".to_vec()));
        std::env::set_var(HOST_NAME_VAR, OsString::from_vec(b"db\xff".to_vec()));

        let report = DatabaseConfigReport::from_env(&ProcessEnv);

        std::env::remove_var(PASSWORD_VAR);
        std::env::remove_var(HOST_NAME_VAR);

        assert!(!report.is_password_empty);
        assert_eq!(report.host, "db\u{FFFD}");
    }

    #[test]
    fn test_mock_env_returns_configured_values() {
        let env = MockEnv::new().with(HOST_NAME_VAR, "db1");
        assert_eq!(env.var(HOST_NAME_VAR).as_deref(), Some("db1"));
        assert_eq!(env.var(PORT_VAR), None);
    }
}

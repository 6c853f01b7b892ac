use super::env::{
    EnvSource, DATABASE_NAME_VAR, HOST_NAME_VAR, PASSWORD_VAR, PORT_VAR, USERNAME_VAR,
};
use serde::Serialize;

/// Database connection settings as reported by `/database-configs`
///
/// The password itself is never stored here, only whether it is empty.
/// Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfigReport {
    pub host: String,
    pub port: String,
    pub username: String,
    pub is_password_empty: bool,
    pub database: String,
}

impl DatabaseConfigReport {
    /// Build the report from the given environment
    ///
    /// Unset variables become empty strings. `is_password_empty` is true
    /// when `PASSWORD` is unset or set to `""`.
    pub fn from_env(env: &dyn EnvSource) -> Self {
        let lookup = |key: &str| env.var(key).unwrap_or_default();

        Self {
            host: lookup(HOST_NAME_VAR),
            port: lookup(PORT_VAR),
            username: lookup(USERNAME_VAR),
            is_password_empty: lookup(PASSWORD_VAR).is_empty(),
            database: lookup(DATABASE_NAME_VAR),
        }
    }
}

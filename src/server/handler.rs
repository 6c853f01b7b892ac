//! `/database-configs` handler
//!
//! Reports the database connection settings visible in the environment.
//! The handler accepts every HTTP method and keeps no state between requests.

use crate::config::{DatabaseConfigReport, EnvSource};
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// State shared by request handlers
#[derive(Clone)]
pub struct AppState {
    env: Arc<dyn EnvSource>,
}

impl AppState {
    pub fn new(env: Arc<dyn EnvSource>) -> Self {
        Self { env }
    }
}

/// Database config handler
///
/// Returns 200 with the JSON report, or 500 if it cannot be encoded.
pub async fn database_configs(State(state): State<AppState>) -> Response {
    let report = DatabaseConfigReport::from_env(state.env.as_ref());
    debug!(
        host = %report.host,
        port = %report.port,
        database = %report.database,
        password_empty = report.is_password_empty,
        "Serving database config"
    );
    encode_report(&report)
}

/// Serialize `body` as a newline-terminated JSON response
///
/// Encoding failures become a plain-text 500 carrying the serializer error.
pub fn encode_report<T: Serialize + ?Sized>(body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(mut bytes) => {
            bytes.push(b'\n');
            (StatusCode::OK, [(CONTENT_TYPE, "application/json")], bytes).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode response: {}\n", e),
        )
            .into_response(),
    }
}

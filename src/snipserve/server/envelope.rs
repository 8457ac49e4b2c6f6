//! The uniform JSON envelope: `{ "success": true, ... }` on the happy path,
//! `{ "success": false, "error": "..." }` otherwise.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::commands::stats::StatsReport;
use crate::config::Environment;
use crate::error::SnipError;
use crate::model::FileRecord;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    pub success: bool,
    pub files: Vec<FileRecord>,
    pub count: usize,
    pub server_time: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct FilePayload {
    pub success: bool,
    pub file: FileRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted {
    pub success: bool,
    pub message: &'static str,
    pub deleted_file: FileRecord,
}

#[derive(Serialize)]
pub struct Stats {
    pub success: bool,
    pub stats: StatsReport,
}

#[derive(Serialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
}

pub fn failure(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(Failure {
            success: false,
            error: error.into(),
        }),
    )
        .into_response()
}

/// Map a command error to the wire envelope. Internal error details are
/// suppressed outside development.
pub fn error_response(err: SnipError, environment: Environment) -> Response {
    match err {
        SnipError::FileNotFound(_) => failure(StatusCode::NOT_FOUND, "File not found"),
        SnipError::InvalidInput(message) => failure(StatusCode::BAD_REQUEST, message),
        other => {
            let message = match environment {
                Environment::Development => other.to_string(),
                Environment::Production => "Something went wrong!".to_string(),
            };
            failure(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

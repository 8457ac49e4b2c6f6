use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::envelope::{self, Deleted, FileList, FilePayload, Stats};
use super::AppState;
use crate::model::FileUpdate;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");
const APP_JS: &str = include_str!("../../../assets/app.js");
const STYLE_CSS: &str = include_str!("../../../assets/style.css");

const MISSING_FIELDS: &str = "Name and content are required";

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Unmatched routes render the landing page with a 404 status.
pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(INDEX_HTML))
}

pub async fn app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], APP_JS)
}

pub async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLE_CSS)
}

pub async fn list_files(State(state): State<Arc<AppState>>) -> Response {
    let result = state.api.read().list_files();
    match result {
        Ok(files) => {
            let count = files.len();
            Json(FileList {
                success: true,
                files,
                count,
                server_time: Utc::now(),
            })
            .into_response()
        }
        Err(err) => envelope::error_response(err, state.environment),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBody {
    pub name: Option<String>,
    pub content: Option<String>,
}

pub async fn create_file(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateBody>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return envelope::failure(StatusCode::BAD_REQUEST, MISSING_FIELDS);
    };
    // Empty content is a valid file; an absent content field is not.
    let (Some(name), Some(content)) = (body.name, body.content) else {
        return envelope::failure(StatusCode::BAD_REQUEST, MISSING_FIELDS);
    };

    let result = state.api.write().create_file(name, content);
    match result {
        Ok(file) => (
            StatusCode::CREATED,
            Json(FilePayload {
                success: true,
                file,
                message: Some("File created successfully"),
            }),
        )
            .into_response(),
        Err(err) => envelope::error_response(err, state.environment),
    }
}

pub async fn get_file(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let result = state.api.read().get_file(&id);
    match result {
        Ok(file) => Json(FilePayload {
            success: true,
            file,
            message: None,
        })
        .into_response(),
        Err(err) => envelope::error_response(err, state.environment),
    }
}

pub async fn update_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<FileUpdate>, JsonRejection>,
) -> Response {
    let Ok(Json(update)) = body else {
        return envelope::failure(StatusCode::BAD_REQUEST, "Invalid request body");
    };

    let result = state.api.write().update_file(&id, update);
    match result {
        Ok(file) => Json(FilePayload {
            success: true,
            file,
            message: Some("File updated successfully"),
        })
        .into_response(),
        Err(err) => envelope::error_response(err, state.environment),
    }
}

pub async fn delete_file(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let result = state.api.write().delete_file(&id);
    match result {
        Ok(deleted_file) => Json(Deleted {
            success: true,
            message: "File deleted successfully",
            deleted_file,
        })
        .into_response(),
        Err(err) => envelope::error_response(err, state.environment),
    }
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Response {
    let result = state.api.read().stats(state.uptime());
    match result {
        Ok(stats) => Json(Stats {
            success: true,
            stats,
        })
        .into_response(),
        Err(err) => envelope::error_response(err, state.environment),
    }
}

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub uptime: f64,
    pub environment: &'static str,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "OK",
        timestamp: Utc::now(),
        uptime: state.uptime().as_secs_f64(),
        environment: state.environment.as_str(),
    })
}

//! End-to-end tests against the router, no socket involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use snipserve::config::Environment;
use snipserve::server::{self, AppState};
use snipserve::store::memory::MemoryStore;

fn seeded_app() -> Router {
    server::app(AppState::new(MemoryStore::seeded(), Environment::Development))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

fn json_request(method: &str, path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(path: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn list_returns_seeded_files_in_envelope() {
    let app = seeded_app();
    let (status, body) = send(&app, get("/api/files")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(3));
    assert_eq!(body["files"].as_array().unwrap().len(), 3);
    assert!(body["serverTime"].is_string());
    assert_eq!(body["files"][0]["id"], json!("sample-js"));
    assert_eq!(body["files"][0]["language"], json!("javascript"));
}

#[tokio::test]
async fn create_returns_201_with_derived_metadata() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/files",
            json!({"name": "hello.ts", "content": "const x = 1;"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("File created successfully"));
    assert_eq!(body["file"]["name"], json!("hello.ts"));
    assert_eq!(body["file"]["language"], json!("typescript"));
    assert_eq!(body["file"]["extension"], json!(".ts"));
    assert!(body["file"]["createdAt"].is_string());

    let (_, list) = send(&app, get("/api/files")).await;
    assert_eq!(list["count"], json!(4));
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let app = seeded_app();

    for payload in [
        json!({"content": "orphan"}),
        json!({"name": "a.rs"}),
        json!({"name": "", "content": "x"}),
    ] {
        let (status, body) = send(&app, json_request("POST", "/api/files", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Name and content are required"));
    }
}

#[tokio::test]
async fn create_accepts_empty_content() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        json_request("POST", "/api/files", json!({"name": "empty.md", "content": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["file"]["content"], json!(""));
    assert_eq!(body["file"]["language"], json!("markdown"));
}

#[tokio::test]
async fn malformed_body_yields_envelope_not_framework_error() {
    let app = seeded_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/files")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn get_one_and_unknown_id() {
    let app = seeded_app();

    let (status, body) = send(&app, get("/api/files/sample-py")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["file"]["name"], json!("example.py"));

    let (status, body) = send(&app, get("/api/files/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("File not found"));
}

#[tokio::test]
async fn rename_recomputes_language() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        json_request("PUT", "/api/files/sample-js", json!({"name": "example.rb"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("File updated successfully"));
    assert_eq!(body["file"]["name"], json!("example.rb"));
    assert_eq!(body["file"]["language"], json!("ruby"));
    assert_eq!(body["file"]["extension"], json!(".rb"));

    // Content was untouched by the rename.
    let (_, fetched) = send(&app, get("/api/files/sample-js")).await;
    assert_eq!(fetched["file"]["content"], body["file"]["content"]);
}

#[tokio::test]
async fn update_content_only_keeps_name() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/api/files/sample-css",
            json!({"content": "body {}"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["file"]["name"], json!("styles.css"));
    assert_eq!(body["file"]["language"], json!("css"));
    assert_eq!(body["file"]["content"], json!("body {}"));
}

#[tokio::test]
async fn update_cannot_touch_id_or_created_at() {
    let app = seeded_app();
    let (_, before) = send(&app, get("/api/files/sample-js")).await;

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/api/files/sample-js",
            json!({"id": "hijacked", "createdAt": "1970-01-01T00:00:00Z", "content": "x"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["file"]["id"], json!("sample-js"));
    assert_eq!(body["file"]["createdAt"], before["file"]["createdAt"]);
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let app = seeded_app();
    let (status, _) = send(
        &app,
        json_request("PUT", "/api/files/ghost", json!({"content": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_and_second_delete_is_404() {
    let app = seeded_app();

    let (status, body) = send(&app, delete("/api/files/sample-css")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("File deleted successfully"));
    assert_eq!(body["deletedFile"]["name"], json!("styles.css"));

    let (_, list) = send(&app, get("/api/files")).await;
    assert_eq!(list["count"], json!(2));

    let (status, _) = send(&app, delete("/api/files/sample-css")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seeded_lifecycle_scenario() {
    let app = seeded_app();

    let (_, list) = send(&app, get("/api/files")).await;
    let seeded_ids: Vec<String> = list["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect();

    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/api/files",
            json!({"name": "a.rs", "content": "fn main(){}"}),
        ),
    )
    .await;
    let id = created["file"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["file"]["language"], json!("rust"));
    assert_eq!(created["file"]["extension"], json!(".rs"));

    let (_, list) = send(&app, get("/api/files")).await;
    assert_eq!(list["count"], json!(4));

    let (_, renamed) = send(
        &app,
        json_request("PUT", &format!("/api/files/{id}"), json!({"name": "a.go"})),
    )
    .await;
    assert_eq!(renamed["file"]["language"], json!("go"));

    let (status, _) = send(&app, delete(&format!("/api/files/{id}"))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, get("/api/files")).await;
    let final_ids: Vec<String> = list["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(final_ids, seeded_ids);
}

#[tokio::test]
async fn stats_aggregates_the_collection() {
    let app = seeded_app();
    let (status, body) = send(&app, get("/api/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["stats"]["totalFiles"], json!(3));
    assert!(body["stats"]["totalCharacters"].as_u64().unwrap() > 0);
    let languages: Vec<&str> = body["stats"]["languages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l.as_str().unwrap())
        .collect();
    assert_eq!(languages, ["javascript", "python", "css"]);
    assert!(body["stats"]["serverUptime"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn health_reports_status_and_environment() {
    let app = seeded_app();
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("OK"));
    assert_eq!(body["environment"], json!("development"));
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn landing_page_and_fallback() {
    let app = seeded_app();

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));

    let response = app.clone().oneshot(get("/no/such/page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
}

#[tokio::test]
async fn static_assets_have_content_types() {
    let app = seeded_app();

    let response = app.clone().oneshot(get("/static/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript"
    );

    let response = app.clone().oneshot(get("/static/style.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
}

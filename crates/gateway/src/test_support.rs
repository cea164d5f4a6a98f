//! Router harness shared by the gateway tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use blogforge_common::{
    config::{AppConfig, DatabaseConfig},
    db::DbPool,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{create_router, AppState};

/// Full router over a fresh in-memory store
pub async fn test_app(strict_status_codes: bool) -> Router {
    let mut config = AppConfig::default();
    config.database = DatabaseConfig::in_memory();
    config.server.strict_status_codes = strict_status_codes;

    let db = tokio_test::assert_ok!(DbPool::new(&config.database).await);
    create_router(AppState {
        config: Arc::new(config),
        db,
    })
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    (response.status(), body_json(response).await)
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    (response.status(), body_json(response).await)
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Valid payload with the given title and status
pub fn article_json(title: &str, status: &str) -> Value {
    json!({
        "title": title,
        "content": "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(5),
        "category": "tech",
        "status": status,
    })
}

/// Create through the API and return the new id
pub async fn create_article(app: &Router, title: &str, status: &str) -> i64 {
    let (_, body) = send(app, Method::POST, "/article", Some(article_json(title, status))).await;
    assert_eq!(body["status"], "OK", "create failed: {body}");

    let listing = match status {
        "publish" => "/article/published",
        "draft" => "/article/drafted",
        _ => "/article/trashed",
    };
    let (_, body) = send(app, Method::GET, listing, None).await;
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["title"] == title)
        .and_then(|a| a["id"].as_i64())
        .unwrap()
}

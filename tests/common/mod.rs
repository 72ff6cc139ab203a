#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use faq_backend::{build_router, AppConfig, AppState, FaqService, MemoryFaqStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Config with defaults; nothing here touches the environment.
pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|_| None).unwrap()
}

/// Full router (same middleware as production) over an in-memory store.
pub fn build_test_app() -> Router {
    let store = Arc::new(MemoryFaqStore::new());
    let state = AppState::new(FaqService::new(store));
    build_router(state, &test_config())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    TestResponse { status, headers, json }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// Create an entry and return its id.
pub async fn create_faq(app: &Router, title: &str, position: i32, is_active: bool) -> String {
    let body = serde_json::json!({
        "title": title,
        "content": format!("answer to {title}"),
        "position": position,
        "is_active": is_active,
    })
    .to_string();
    let res = post_json(app, "/api/v1/faqs", &body).await;
    assert_eq!(res.status, StatusCode::CREATED, "create failed: {}", res.json);
    res.json["data"]["id"].as_str().unwrap().to_string()
}

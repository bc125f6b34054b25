//! In-process HTTP client for the axum router.
//!
//! Requests go straight to the `Router` via `tower::ServiceExt::oneshot`,
//! with no socket in between.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use blog_core::kernel::{MemoryStore, ServerDeps};
use blog_core::server::build_app;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use super::EDITOR_PASSWORD;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// Router over a fresh in-memory store.
    pub fn new() -> Self {
        let (deps, store) = ServerDeps::in_memory(EDITOR_PASSWORD);
        Self {
            router: build_app(deps, &[]),
            store,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        send(&self.router, Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send(&self.router, Method::POST, uri, Some(body), None).await
    }

    pub async fn send_as_editor(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: &str,
    ) -> (StatusCode, Value) {
        send(&self.router, method, uri, body, Some(token)).await
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        send(&self.router, method, uri, body, None).await
    }

    /// Log in with the test editor password and return the bearer token.
    pub async fn login(&self) -> String {
        let (status, body) = self
            .post("/auth/login", json!({ "password": EDITOR_PASSWORD }))
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["token"]
            .as_str()
            .expect("login response carries a token")
            .to_string()
    }
}

/// Send one request and decode the JSON response (`Value::Null` if empty).
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, value)
}

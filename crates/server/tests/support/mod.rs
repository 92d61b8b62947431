#![allow(dead_code)]

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

use server::routes;
use server::security::HttpsPolicy;
use server::state::AppState;

pub const BASE_URL: &str = "/accounts";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Router over a fresh in-memory SQLite database.
pub async fn build_app_with(https: HttpsPolicy) -> anyhow::Result<Router> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(routes::build_router(AppState::from_db(db), https))
}

pub async fn build_app() -> anyhow::Result<Router> {
    build_app_with(HttpsPolicy { force_https: false }).await
}

pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<TestResponse> {
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let headers = res.headers().clone();
    let body = to_bytes(res.into_body(), usize::MAX).await?;
    Ok(TestResponse { status, headers, body })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).expect("request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder().method("DELETE").uri(uri).body(Body::empty()).expect("request")
}

pub fn with_body(method: &str, uri: &str, content_type: Option<&str>, body: String) -> Request<Body> {
    let mut b = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        b = b.header(header::CONTENT_TYPE, ct);
    }
    b.body(Body::from(body)).expect("request")
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    with_body("POST", uri, Some("application/json"), body.to_string())
}

pub fn put_json(uri: &str, body: &Value) -> Request<Body> {
    with_body("PUT", uri, Some("application/json"), body.to_string())
}

/// Payload in the shape the service serializes, minus the id.
pub fn account_payload(n: usize) -> Value {
    serde_json::json!({
        "name": format!("Account {n}"),
        "email": format!("account{n}@example.com"),
        "address": format!("{n} Main St"),
        "phone_number": format!("555-{n:04}"),
        "date_joined": "2023-07-14",
    })
}

/// Create `count` accounts through the API and return their ids.
pub async fn create_accounts(app: &Router, count: usize) -> anyhow::Result<Vec<i64>> {
    let mut ids = Vec::with_capacity(count);
    for n in 0..count {
        let res = send(app, post_json(BASE_URL, &account_payload(n))).await?;
        assert_eq!(res.status, StatusCode::CREATED, "Could not create test Account");
        ids.push(res.json()["id"].as_i64().expect("integer id"));
    }
    Ok(ids)
}

use axum::{routing::get, Json, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, ServiceInfo};

use crate::errors::ApiError;
use crate::openapi::ApiDoc;
use crate::security::{HttpsPolicy, RouterSecurityExt};
use crate::state::AppState;

pub mod accounts;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Healthy", body = crate::openapi::HealthDoc)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service name and version", body = crate::openapi::ServiceInfoDoc)))]
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn fallback() -> ApiError {
    ApiError::NotFound("Not Found".into())
}

/// Build the full application router with security headers and request tracing.
pub fn build_router(state: AppState, https: HttpsPolicy) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/accounts", get(accounts::list).post(accounts::create))
        .route(
            "/accounts/:id",
            get(accounts::read).put(accounts::update).delete(accounts::delete),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(fallback)
        .with_state(state)
        .with_security(https)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

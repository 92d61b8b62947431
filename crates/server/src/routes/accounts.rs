use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use service::account::{Account, AccountInput};
use tracing::{error, info};

use crate::{errors::ApiError, state::AppState};

const JSON_MEDIA_TYPE: &str = "application/json";
const NOT_FOUND: &str = "Account not found";

/// Rejects the request unless `Content-Type` is exactly `media_type`.
fn check_content_type(headers: &HeaderMap, media_type: &str) -> Result<(), ApiError> {
    let content_type = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok());
    if content_type == Some(media_type) {
        return Ok(());
    }
    error!(content_type = ?content_type, "invalid content type");
    Err(ApiError::UnsupportedMediaType(format!("Content-Type must be {media_type}")))
}

/// Only integer ids address an account; anything else is simply unknown.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound(NOT_FOUND.into()))
}

#[utoipa::path(
    post, path = "/accounts", tag = "accounts",
    request_body(content = crate::openapi::AccountInputDoc, content_type = "application/json"),
    responses(
        (status = 201, description = "Created", body = crate::openapi::AccountDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 415, description = "Unsupported Media Type", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    info!("request to create an account");
    check_content_type(&headers, JSON_MEDIA_TYPE)?;
    let input = AccountInput::parse(&body)?;
    let account = state.accounts.create(input).await?;
    let location = format!("/accounts/{}", account.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(account)))
}

#[utoipa::path(
    get, path = "/accounts", tag = "accounts",
    responses((status = 200, description = "List OK", body = [crate::openapi::AccountDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.accounts.list().await?;
    info!(count = accounts.len(), "list accounts");
    Ok(Json(accounts))
}

#[utoipa::path(
    get, path = "/accounts/{id}", tag = "accounts",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AccountDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn read(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Account>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.accounts.get(id).await?))
}

/// Existence is checked before the body, so an unknown id is a 404 even
/// when the payload is invalid.
#[utoipa::path(
    put, path = "/accounts/{id}", tag = "accounts",
    params(("id" = i32, Path, description = "Account ID")),
    request_body(content = crate::openapi::AccountInputDoc, content_type = "application/json"),
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AccountDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Account>, ApiError> {
    let id = parse_id(&id)?;
    state.accounts.get(id).await?;
    let input = AccountInput::parse(&body)?;
    Ok(Json(state.accounts.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/accounts/{id}", tag = "accounts",
    params(("id" = i32, Path, description = "Account ID")),
    responses((status = 204, description = "Deleted, or nothing to delete"))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    if let Ok(id) = parse_id(&id) {
        state.accounts.delete(id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

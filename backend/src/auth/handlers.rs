//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for user authentication
//! (sign-up, sign-in, session resolution, sign-out), parse request data,
//! and delegate to the `auth::service` for core business logic.

use crate::api::common::service_error_to_http;
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::auth::session::SessionStore;
use crate::config::Config;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use sqlx::SqlitePool;

/// Handle user registration
#[axum::debug_handler]
pub async fn sign_up(
    Extension(pool): Extension<SqlitePool>,
    Extension(sessions): Extension<SessionStore>,
    Extension(config): Extension<Config>,
    Json(payload): Json<SignUpRequest>,
) -> Result<ResponseJson<UserResponse>, (StatusCode, String)> {
    let auth_service = AuthService::new(&pool, &sessions, &config);

    match auth_service.sign_up(payload).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user sign-in
#[axum::debug_handler]
pub async fn sign_in(
    Extension(pool): Extension<SqlitePool>,
    Extension(sessions): Extension<SessionStore>,
    Extension(config): Extension<Config>,
    Json(payload): Json<SignInRequest>,
) -> Result<ResponseJson<SignInResponse>, (StatusCode, String)> {
    let auth_service = AuthService::new(&pool, &sessions, &config);

    match auth_service.sign_in(payload).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Get the current user for the presented session token
#[axum::debug_handler]
pub async fn authenticate(
    Extension(pool): Extension<SqlitePool>,
    Extension(sessions): Extension<SessionStore>,
    Extension(config): Extension<Config>,
    Extension(session): Extension<Option<AuthSession>>,
) -> Result<Response, (StatusCode, String)> {
    // No established identity is not an error here; the body is null.
    let Some(session) = session else {
        return Ok(ResponseJson(serde_json::Value::Null).into_response());
    };

    let auth_service = AuthService::new(&pool, &sessions, &config);

    match auth_service.authenticate(&session.token).await {
        Ok(user) => Ok(ResponseJson(user).into_response()),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle sign-out
#[axum::debug_handler]
pub async fn sign_out(
    Extension(pool): Extension<SqlitePool>,
    Extension(sessions): Extension<SessionStore>,
    Extension(config): Extension<Config>,
    Extension(session): Extension<Option<AuthSession>>,
) -> Result<Response, (StatusCode, String)> {
    let Some(session) = session else {
        return Ok(ResponseJson(serde_json::Value::Null).into_response());
    };

    let auth_service = AuthService::new(&pool, &sessions, &config);

    match auth_service.sign_out(&session.token, &session.user_id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(error) => Err(service_error_to_http(error)),
    }
}

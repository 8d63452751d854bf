//! Middleware for protecting authenticated routes.
//!
//! This module contains the logic for resolving session tokens on inbound
//! requests and establishing the caller's identity for downstream handlers.

use crate::auth::models::AuthSession;
use crate::auth::session::SessionStore;
use axum::{
    extract::Request,
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

/// Session authentication middleware (doesn't fail if no token).
///
/// Reads the bearer token from the Authorization header, resolves it
/// against the session store, and inserts an `Option<AuthSession>` into
/// request extensions for downstream handlers.
pub async fn session_auth(mut request: Request, next: Next) -> Result<Response, StatusCode> {
    let store = request
        .extensions()
        .get::<SessionStore>()
        .cloned()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::to_owned);

    let session: Option<AuthSession> = match token {
        Some(token) => store.get(&token).await.map(|data| AuthSession {
            token,
            user_id: data.user_id,
        }),
        None => None,
    };

    // Always insert the Option<AuthSession>, even if it's None
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

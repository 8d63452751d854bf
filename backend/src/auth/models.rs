//! Data structures for authentication-related entities.
//!
//! This module defines request and response models for the sign-up,
//! sign-in, authenticate and sign-out flows, used for data transfer within
//! the authentication flow and over the wire.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sign-up request payload
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Sign-in request payload
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User projection safe to hand to clients.
///
/// Carries no password hash and no session tokens.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

/// Sign-in response containing the scrubbed user and the session token.
///
/// The token is the sole authentication bearer; how it travels back on
/// subsequent requests (header, cookie) is the caller's concern.
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Identity established by the session middleware for the current request.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user_id: String,
}

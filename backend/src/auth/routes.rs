//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle user sign-up, sign-in, session resolution and
//! sign-out. They are designed to be integrated into the main Axum router.

use crate::auth::handlers::*;
use crate::auth::middleware::*;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the user authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .route(
            "/sign-out",
            get(sign_out).layer(middleware::from_fn(session_auth)),
        )
        .route(
            "/authenticate",
            get(authenticate).layer(middleware::from_fn(session_auth)),
        )
}

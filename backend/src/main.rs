//! Main entry point for the backend.
//!
//! This file initializes the Axum web server, sets up the database
//! connection and the in-memory session store, and registers all API
//! routes and middleware.

use axum::{Extension, Router, response::Json, routing::get};
use backend::api::common::ApiResponse;
use backend::auth;
use backend::auth::session::SessionStore;
use backend::config::Config;
use backend::database::Database;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    let pool = db.pool().clone();
    let sessions = SessionStore::new();

    let app = Router::new()
        .route("/", get(root_handler))
        .nest("/users", auth::routes::auth_router())
        .layer(Extension(pool))
        .layer(Extension(sessions))
        .layer(Extension(config.clone()));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting auth server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "Auth Backend",
            "version": "0.1.0"
        }),
        "Api 200",
    ))
}

//! Error handling utilities for API responses.
//!
//! Provides structured error responses and conversion between service-layer
//! errors and HTTP responses.
//!
//! # Response Format
//! All errors return consistent JSON responses containing:
//! - `message`: Human-readable message
//! - `error_type`: Machine-readable error category
//!
//! # Error Handling Flow
//! 1. Service layer returns a domain-specific `ServiceError`
//! 2. `service_error_to_http` converts it to the appropriate HTTP response

use crate::errors::ServiceError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    /// Request timestamp
    pub timestamp: String,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error type identifier
    pub error_type: String,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a successful response with default message
    pub fn ok(data: T) -> Self {
        Self::success(data, "Request successful")
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, error_type: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(ErrorDetails {
                error_type: error_type.into(),
            }),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Converts a ServiceError into an HTTP status code and serialized body.
///
/// Expected outcomes keep their message; storage failures are logged and
/// surface an opaque message.
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, String) {
    let (status, error_type, message) = match error {
        ServiceError::MissingField { field } => (
            StatusCode::BAD_REQUEST,
            "missing_field",
            format!("Missing required field: {}", field),
        ),
        ServiceError::UsernameExists { username } => (
            StatusCode::CONFLICT,
            "username_exists",
            format!("Username '{}' already exists", username),
        ),
        ServiceError::NotFound { entity } => (
            StatusCode::NOT_FOUND,
            "not_found",
            format!("{} not found", entity),
        ),
        ServiceError::CredentialMismatch => (
            StatusCode::UNAUTHORIZED,
            "credential_mismatch",
            "Username and password do not match".to_string(),
        ),
        ServiceError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "Unauthorized".to_string(),
        ),
        ServiceError::Database { source } => {
            tracing::error!("Database error: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                "Internal server error".to_string(),
            )
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
            )
        }
    };

    let error_response = ApiResponse::<()>::error(message, error_type);
    (status, serde_json::to_string(&error_response).unwrap())
}

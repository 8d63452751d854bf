//! Global application error types and handlers.
//!
//! This module defines the error taxonomy used across the backend. Expected
//! outcomes of the authentication flow (missing input, unknown user, bad
//! credentials) get their own variants so call sites can match on them,
//! while storage failures are wrapped opaquely.

use thiserror::Error;

/// Generic service error used by every service in the crate.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required request field was absent or empty.
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A user with the requested username already exists.
    #[error("Username '{username}' already exists")]
    UsernameExists { username: String },

    #[error("{entity} not found")]
    NotFound { entity: String },

    /// Username exists but the supplied password does not match.
    #[error("Username and password do not match")]
    CredentialMismatch,

    /// No valid session for the presented token.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {source}")]
    Database {
        #[from]
        source: anyhow::Error,
    },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn username_exists(username: impl Into<String>) -> Self {
        Self::UsernameExists {
            username: username.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

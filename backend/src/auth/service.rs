//! Core business logic for the authentication system.

use crate::auth::models::*;
use crate::auth::password::PasswordHasher;
use crate::auth::session::{SessionData, SessionStore};
use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};
use crate::services::user_service::UserService;
use crate::utils::generate_random_string::generate_random_string;
use sqlx::SqlitePool;
use validator::Validate;

/// Length of minted session tokens.
const SESSION_TOKEN_LENGTH: usize = 32;

/// Authentication service orchestrating credential checks, the in-memory
/// session store and the durable session list on the user record.
///
/// A token moves through three states: unknown, active (present in the
/// store and in the durable list) and revoked. A revoked token is never
/// resurrected; a new sign-in always mints a fresh one.
pub struct AuthService<'a> {
    sessions: &'a SessionStore,
    hasher: PasswordHasher,
    user_service: UserService<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, sessions: &'a SessionStore, config: &Config) -> Self {
        AuthService {
            sessions,
            hasher: PasswordHasher::new(config.bcrypt_cost),
            user_service: UserService::new(pool),
        }
    }

    /// Registers a new user.
    ///
    /// Does not issue a session; sign-up and sign-in are separate
    /// operations.
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - Missing username or password (checked before any store access)
    /// - An already-taken username
    pub async fn sign_up(&self, request: SignUpRequest) -> ServiceResult<UserResponse> {
        validate_required(&request)?;

        let user = self
            .user_service
            .create_user(&request.username, &request.password, &self.hasher)
            .await?;

        Ok(UserResponse {
            id: user.id,
            username: user.username,
        })
    }

    /// Authenticates credentials and issues a fresh session token.
    ///
    /// On success the token is written to the session store and prepended
    /// to the user's durable session list, newest first.
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - Missing username or password
    /// - An unknown username (`NotFound`)
    /// - A known username with the wrong password (`CredentialMismatch`)
    pub async fn sign_in(&self, request: SignInRequest) -> ServiceResult<SignInResponse> {
        validate_required(&request)?;

        let user = self
            .user_service
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        if !self.hasher.verify(&request.password, &user.password_hash) {
            return Err(ServiceError::CredentialMismatch);
        }

        let token = generate_random_string(SESSION_TOKEN_LENGTH);
        self.sessions
            .set(
                token.clone(),
                SessionData {
                    user_id: user.id.clone(),
                },
            )
            .await;

        let mut session_tokens = Vec::with_capacity(user.sessions.len() + 1);
        session_tokens.push(token.clone());
        session_tokens.extend(user.sessions);

        let summary = self
            .user_service
            .replace_sessions(&user.id, &session_tokens)
            .await?;

        Ok(SignInResponse {
            user: UserResponse {
                id: summary.id,
                username: summary.username,
            },
            token,
        })
    }

    /// Resolves a session token to the current user record.
    ///
    /// The user is always re-read from the database so durable-side changes
    /// are visible immediately; the store only maps token to user id. A
    /// token absent from the store is treated as an expired session even if
    /// it still appears in the durable list.
    ///
    /// # Errors
    /// Returns `ServiceError::Unauthorized` when the token resolves to no
    /// live session or the user record no longer exists.
    pub async fn authenticate(&self, token: &str) -> ServiceResult<UserResponse> {
        let session = self
            .sessions
            .get(token)
            .await
            .ok_or(ServiceError::Unauthorized)?;

        let user = self
            .user_service
            .find_by_id(&session.user_id)
            .await?
            .ok_or(ServiceError::Unauthorized)?;

        Ok(UserResponse {
            id: user.id,
            username: user.username,
        })
    }

    /// Revokes a session token for the given user.
    ///
    /// The token is filtered out of the durable list (the order of the
    /// remaining entries is preserved) and removed from the session store.
    /// The store delete runs even when the durable update fails. Revoking
    /// an already-revoked token is a no-op.
    pub async fn sign_out(&self, token: &str, user_id: &str) -> ServiceResult<()> {
        let durable = self.remove_durable_session(token, user_id).await;

        // Cache cleanup is unconditional.
        self.sessions.del(token).await;

        durable
    }

    async fn remove_durable_session(&self, token: &str, user_id: &str) -> ServiceResult<()> {
        let Some(user) = self.user_service.find_by_id(user_id).await? else {
            return Ok(());
        };

        let session_tokens: Vec<String> =
            user.sessions.into_iter().filter(|t| t != token).collect();

        self.user_service
            .replace_sessions(user_id, &session_tokens)
            .await?;

        Ok(())
    }
}

/// Maps an empty or absent request field to `MissingField` before any store
/// is touched.
fn validate_required<T: Validate>(request: &T) -> ServiceResult<()> {
    if let Err(validation_errors) = request.validate() {
        let field = validation_errors
            .field_errors()
            .into_iter()
            .next()
            .map(|(field, _)| field.to_string())
            .unwrap_or_else(|| "request".to_string());
        return Err(ServiceError::missing_field(field));
    }
    Ok(())
}

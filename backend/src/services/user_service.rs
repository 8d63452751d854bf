//! User business logic service.
//!
//! Store-boundary operations above the user repository: id generation,
//! duplicate-username checks, and session-list persistence.

use crate::auth::password::PasswordHasher;
use crate::database::models::{CreateUser, User, UserSummary};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Looks up a user by username.
    pub async fn find_by_username(&self, username: &str) -> ServiceResult<Option<User>> {
        let repo = UserRepository::new(self.pool);
        Ok(repo.find_one(Some(username), None).await?)
    }

    /// Looks up a user by id.
    pub async fn find_by_id(&self, id: &str) -> ServiceResult<Option<User>> {
        let repo = UserRepository::new(self.pool);
        Ok(repo.find_one(None, Some(id)).await?)
    }

    /// Creates a new user, hashing the password for storage.
    ///
    /// Existence is pre-checked via lookup before the password is hashed
    /// and the row inserted. Two concurrent sign-ups can both pass this
    /// check; the UNIQUE constraint on `username` decides the winner, so at
    /// most one insert succeeds.
    ///
    /// # Errors
    /// Returns `ServiceError::UsernameExists` if the username is taken.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        hasher: &PasswordHasher,
    ) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        if repo.find_one(Some(username), None).await?.is_some() {
            return Err(ServiceError::username_exists(username));
        }

        let password_hash = hasher.hash(password)?;

        let data = CreateUser {
            id: Uuid::now_v7().to_string(),
            username: username.to_string(),
            password_hash,
        };

        let user = repo.create_user(data).await?;
        Ok(user)
    }

    /// Replaces the durable session-token list for a user.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if no user has the given id.
    pub async fn replace_sessions(
        &self,
        id: &str,
        sessions: &[String],
    ) -> ServiceResult<UserSummary> {
        let repo = UserRepository::new(self.pool);
        let summary = repo
            .update_sessions(id, sessions)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;
        Ok(summary)
    }
}

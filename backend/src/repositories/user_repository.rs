//! Database repository for user management operations.
//!
//! Provides lookup, creation and session-list updates for user records.

use crate::database::models::{CreateUser, User, UserRow, UserSummary};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for user database operations.
///
/// Handles all persistence operations for the User entity, including the
/// durable session-token list.
pub struct UserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Looks up a user by username, id, or either.
    ///
    /// The query matches a row satisfying *any* of the supplied fields
    /// (`username = ?1 OR id = ?2`). An absent field binds NULL and cannot
    /// match a row. Callers depend on the match-either contract; do not
    /// tighten this to AND.
    ///
    /// # Returns
    /// `Some(User)` if a row matches, `None` otherwise
    pub async fn find_one(&self, username: Option<&str>, id: Option<&str>) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, sessions, created_at, updated_at
            FROM users
            WHERE username = ?1 OR id = ?2
            "#,
        )
        .bind(username)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Creates a new user in the database.
    ///
    /// The session list starts empty; sign-up does not issue a session.
    /// A UNIQUE constraint on `username` rejects duplicates that slip past
    /// the service-layer existence check.
    ///
    /// # Arguments
    /// * `user` - CreateUser DTO containing user details
    ///
    /// # Returns
    /// The newly created User with all fields populated
    pub async fn create_user(&self, user: CreateUser) -> Result<User> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, username, password_hash, sessions, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, username, password_hash, sessions, created_at, updated_at
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind("[]")
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Replaces the full session-token list for the user identified by `id`.
    ///
    /// # Returns
    /// The narrow `id, username` projection of the updated row, or `None`
    /// if no such user exists. The hash and the new list are not re-read.
    pub async fn update_sessions(
        &self,
        id: &str,
        sessions: &[String],
    ) -> Result<Option<UserSummary>> {
        let encoded = serde_json::to_string(sessions)?;

        let summary = sqlx::query_as::<_, UserSummary>(
            r#"
            UPDATE users
            SET sessions = ?2, updated_at = ?3
            WHERE id = ?1
            RETURNING id, username
            "#,
        )
        .bind(id)
        .bind(encoded)
        .bind(Utc::now())
        .fetch_optional(self.pool)
        .await?;

        Ok(summary)
    }
}

//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these may differ from API-specific models.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user record with its decoded session-token list.
///
/// `sessions` is the authoritative durable record of which tokens are
/// currently valid for this user, newest first. The in-memory session store
/// holds a projection of it that may be lost on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub sessions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw `users` row. The session list is stored as a JSON-encoded TEXT column.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub sessions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = anyhow::Error;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let sessions = serde_json::from_str(&row.sessions)
            .context("sessions column is not a valid JSON array")?;

        Ok(User {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            sessions,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Narrow projection returned by write operations (`RETURNING id, username`).
/// The password hash and the full session list are not re-exposed here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
}

/// Insert payload for a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub username: String,
    pub password_hash: String,
}

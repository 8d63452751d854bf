//! Module for database repositories.
//!
//! Repositories encapsulate all persistence operations and keep SQL out of
//! the service layer.

pub mod user_repository;

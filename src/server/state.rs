//! Application state shared across all request handlers.
//!
//! The state holds the database connection pool. It is initialized once during startup
//! and cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool. Each repository
/// operation checks a connection out for the length of its own transaction only.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

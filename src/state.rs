//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It intentionally holds nothing but
//! the database connection pool: all entity state lives in the database, and no
//! request-spanning caches or counters exist in this process.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool. The
/// pool handle is passed by reference into each repository rather than being
/// reached through a process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided database handle.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

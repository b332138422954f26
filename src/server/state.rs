//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::config::Environment;

/// Shared state cloned into every request handler by axum.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Deployment environment; decides whether error bodies include a trace.
    pub environment: Environment,
}

impl AppState {
    pub fn new(db: DatabaseConnection, environment: Environment) -> Self {
        Self { db, environment }
    }
}

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test environment holding an in-memory database and an optional session.
///
/// Both are created lazily on first access and live as long as the context.
/// The session is persisted in the same in-memory database, so it disappears
/// together with the test data.
#[derive(Default)]
pub struct TestContext {
    /// Connection to the in-memory SQLite database, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session stored in the test database, created by `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates an empty context without a database connection.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the in-memory database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// Usually called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates a session store backed by the test database.
    ///
    /// The session table is created on every call; creation is idempotent. Used
    /// directly by HTTP-level tests that need a `SessionManagerLayer` over the
    /// same database the handlers read from.
    ///
    /// # Returns
    /// - `Ok(SqliteStore)` - Store with its table migrated
    /// - `Err(TestError)` - Failed to connect or to create the session table
    pub async fn session_store(&mut self) -> Result<SqliteStore, TestError> {
        let db = self.database().await?;

        let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        store
            .migrate()
            .await
            .map_err(|e| TestError::SessionStore(e.to_string()))?;

        Ok(store)
    }

    /// Gets or creates a standalone session stored in the test database.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session
    /// - `Err(TestError)` - Failed to initialize the database or session table
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    /// session.insert("auth:user", 1).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = self.session_store().await?;
            let session = Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(1))),
            );
            self.session = Some(session);
        }

        match self.session {
            Some(ref session) => Ok(session),
            None => unreachable!("session initialized above"),
        }
    }

    /// Gets or creates both the database and the session.
    ///
    /// Avoids holding two mutable borrows when a test needs both references.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - References to both
    /// - `Err(TestError)` - Failed to initialize either
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => unreachable!("database and session initialized above"),
        }
    }
}

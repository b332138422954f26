use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are created in the order they are added, so referenced tables must be
/// added before the tables holding foreign keys to them. The `with_*_tables`
/// helpers add complete dependency chains in the right order.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::User;
///
/// let test = TestBuilder::new().with_table(User).build().await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entities, executed by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax,
    /// including unique constraints and foreign keys declared on the entity.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for project operations.
    ///
    /// Adds `User`, `Project` and `ProjectDeveloper` in dependency order.
    pub fn with_project_tables(self) -> Self {
        self.with_table(User)
            .with_table(Project)
            .with_table(ProjectDeveloper)
    }

    /// Adds every table of the application.
    ///
    /// Equivalent to `with_project_tables()` followed by `Ticket` and
    /// `TicketDeveloper`. Use this for ticket tests and for HTTP-level tests
    /// that drive the whole router.
    pub fn with_ticket_tables(self) -> Self {
        self.with_project_tables()
            .with_table(Ticket)
            .with_table(TicketDeveloper)
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an in-memory database and all tables created
    /// - `Err(TestError::Database)` - Failed to connect or to create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

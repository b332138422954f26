//! Bugtracker Test Utils
//!
//! Shared testing utilities for the bugtracker backend. Tests build an isolated
//! in-memory SQLite database containing only the tables they need, optionally
//! with a tower-sessions session stored in the same database, and seed it with
//! factories.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder selecting which entity tables to create
//! - **TestContext**: the built environment (database connection + session)
//! - **TestError**: errors that can occur while setting the environment up
//! - **factory**: builders inserting users, projects and tickets with defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_ticket() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (manager, project, ticket) = factory::helpers::create_ticket_with_dependencies(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

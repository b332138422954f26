//! Service layer between controllers and repositories.
//!
//! Services work with domain models and validated parameters. They hash
//! passwords, check credentials and load referenced resources for responses.

pub mod auth;
pub mod project;
pub mod ticket;
pub mod user;

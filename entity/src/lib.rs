//! SeaORM entity definitions for the bugtracker database.

pub mod prelude;

pub mod project;
pub mod project_developer;
pub mod ticket;
pub mod ticket_developer;
pub mod user;

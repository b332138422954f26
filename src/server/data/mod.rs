//! Database repository layer.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and performs the
//! queries and mutations for one resource. Entity models never leave this
//! layer; callers receive the domain models from `server::model`.

pub mod project;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;

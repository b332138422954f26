//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and turned into DTOs at the controller boundary. References to other
//! resources are carried as `Ref<T>` so services can decide what to populate.

pub mod project;
pub mod query;
pub mod reference;
pub mod ticket;
pub mod user;

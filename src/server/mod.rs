//! Bugtracker backend.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers composing authorization,
//!   validation, a service call and DTO conversion
//! - **Validator Layer** (`validator/`) - First-error-wins field checks producing
//!   operation parameters
//! - **Service Layer** (`service/`) - Password hashing and population of references
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, parameter types and list queries
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authorization guard, session wrapper, body
//!   extractor and error formatting
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database and session store initialization
//! - **Router** (`router`) - Route table and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request; the session layer loads the session
//! 2. **Controller** runs the `AuthGuard` chain, then the validators
//! 3. **Service** executes the operation through the **Data** layer
//! 4. **Controller** converts the domain model to a DTO inside the success envelope
//!
//! Any step may return an `AppError`, which ends the request and is rendered by
//! `IntoResponse` and the `format_errors` middleware.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validator;

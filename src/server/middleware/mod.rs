//! Request processing shared by all routes.
//!
//! - `auth` - Fluent authorization guard run at the start of handlers
//! - `session` - Typed access to the authentication state in the session
//! - `payload` - JSON body extractor with empty-body handling
//! - `error` - Response middleware adding debug details to internal errors

pub mod auth;
pub mod error;
pub mod payload;
pub mod session;

#[cfg(test)]
mod test;

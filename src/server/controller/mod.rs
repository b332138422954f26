//! HTTP request handlers.
//!
//! Each handler runs the authorization chain and the validators its route
//! needs, calls one service operation and wraps the result in the success
//! envelope.

pub mod error;
pub mod project;
pub mod session;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;

//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by controllers, services and
//! middleware. Client-facing failures are expressed through the `ClientError`
//! catalog (directly or via `AuthError`); every other variant is an internal
//! failure that is logged and rendered as a generic 500 response.

pub mod auth;
pub mod client;
pub mod config;
pub mod internal;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::{
    auth::AuthError, client::ClientError, config::ConfigError, internal::InternalError,
};

/// Top-level application error type.
///
/// Most variants use `#[from]` so `?` converts repository, session and domain
/// errors automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization failure.
    ///
    /// Delegates to `AuthError::into_response()` (401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// A catalogued client error, rendered with its own status code.
    #[error(transparent)]
    ClientErr(#[from] ClientError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Failed to bind the listener or to serve connections.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected state inside the application, such as an unknown enum value
    /// read from the database.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

impl AppError {
    /// Returns the catalogued client error this error is rendered as, if any.
    pub fn client_error(&self) -> Option<ClientError> {
        match self {
            Self::ClientErr(err) => Some(*err),
            Self::AuthErr(err) => Some(err.client_error()),
            _ => None,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Catalogued status and body - For `ClientErr` and `AuthErr`
/// - 500 Internal Server Error - For every other variant
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ClientErr(err) => err.into_response(),
            Self::AuthErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Description of an internal failure, attached to 500 responses as a response
/// extension.
///
/// Outside production the `format_errors` middleware copies it into the
/// `stack` field of the error body.
#[derive(Clone, Debug)]
pub struct ErrorTrace(pub String);

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the error and returns the generic `InternalServerError` body so no
/// implementation details leak to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let mut response = ClientError::InternalServerError.into_response();
        response
            .extensions_mut()
            .insert(ErrorTrace(self.0.to_string()));

        response
    }
}

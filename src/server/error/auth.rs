use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::client::ClientError;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The authenticated user failed an authorization check.
    ///
    /// # Fields
    /// - Id of the user that was denied
    /// - Description of the failed check, for logging only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Login attempted with an unknown username/email or a wrong password.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

impl AuthError {
    pub fn client_error(&self) -> ClientError {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => ClientError::Unauthenticated,
            Self::AccessDenied(_, _) => ClientError::AccessDenied,
            Self::InvalidCredentials => ClientError::Authentication,
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthenticated
/// - `AccessDenied` → 403 Access Denied
/// - `InvalidCredentials` → 401 Authentication Error
///
/// The underlying reason is logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        self.client_error().into_response()
    }
}

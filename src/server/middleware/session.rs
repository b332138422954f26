//! Type-safe session wrapper for authentication state.
//!
//! The session stores a single value, the id of the logged in user, under a
//! fixed key. Controllers and the authorization guard go through `AuthSession`
//! instead of touching session keys directly.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "bugtracker";

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user id in the session.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the id of the logged in user.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Logs a user in.
    ///
    /// The session id is cycled first so an id issued before authentication
    /// cannot be reused afterwards.
    pub async fn login(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.set_user_id(user_id).await
    }

    /// Logs out by deleting the session record and expiring the cookie.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

//! Credential verification for login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a username or email and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Missing fields, unknown login
    ///   or wrong password
    /// - `Err(AppError)` - Database or password hash failure
    pub async fn login(
        &self,
        login: Option<&str>,
        password: Option<&str>,
    ) -> Result<User, AppError> {
        let (Some(login), Some(password)) = (login, password) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_username_or_email(login)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

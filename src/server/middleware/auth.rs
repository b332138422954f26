//! Fluent authorization guard.
//!
//! Controllers chain the checks a route needs and then call `require()`:
//!
//! ```ignore
//! let user = AuthGuard::new(&state.db, &session)
//!     .is_authenticated()
//!     .is_own_account(&user_id)
//!     .is_correct_password(dto.password.as_deref())
//!     .custom("role edit", no_role_edit(dto.role.as_deref()))
//!     .require()
//!     .await?;
//! ```
//!
//! The session user is resolved first. Checks then run in the order they
//! were chained and the first failure stops the chain.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
        util::{id::parse_id, password::verify_password},
    },
};

type Predicate<'a> = Box<dyn Fn(&User) -> bool + Send + Sync + 'a>;

/// A single authorization check.
pub enum Permission<'a> {
    /// Passes for any logged in user.
    Authenticated,
    /// The user's role ranks at least this high.
    Role(UserRole),
    /// The raw path id names the user's own account, or the user is an Admin.
    OwnAccount(&'a str),
    /// The given password matches the user's stored hash.
    CorrectPassword(Option<&'a str>),
    /// Arbitrary check; the label is only used for logging.
    Custom(&'static str, Predicate<'a>),
}

impl Permission<'_> {
    fn describe(&self) -> String {
        match self {
            Self::Authenticated => "authenticated".to_string(),
            Self::Role(role) => format!("role {}", role.as_str()),
            Self::OwnAccount(id) => format!("own account {}", id),
            Self::CorrectPassword(_) => "correct password".to_string(),
            Self::Custom(label, _) => (*label).to_string(),
        }
    }

    /// # Returns
    /// - `Ok(true)` - Check passed
    /// - `Ok(false)` - Check failed
    /// - `Err(AppError)` - The check itself could not run
    fn check(&self, user: &User) -> Result<bool, AppError> {
        Ok(match self {
            Self::Authenticated => true,
            Self::Role(role) => user.role >= *role,
            Self::OwnAccount(id) => parse_id(id) == Some(user.id) || user.is_admin(),
            Self::CorrectPassword(password) => match password {
                Some(password) if !password.is_empty() => verify_password(password, &user.hash)?,
                _ => false,
            },
            Self::Custom(_, predicate) => predicate(user),
        })
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    permissions: Vec<Permission<'a>>,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self {
            db,
            session,
            permissions: Vec::new(),
        }
    }

    pub fn is_authenticated(mut self) -> Self {
        self.permissions.push(Permission::Authenticated);
        self
    }

    pub fn is_role(mut self, role: UserRole) -> Self {
        self.permissions.push(Permission::Role(role));
        self
    }

    /// Requires `user_id`, as taken from the path, to be the user's own id.
    /// Admins pass for any account.
    pub fn is_own_account(mut self, user_id: &'a str) -> Self {
        self.permissions.push(Permission::OwnAccount(user_id));
        self
    }

    /// Requires the user's current password. A missing or empty password
    /// fails the check.
    pub fn is_correct_password(mut self, password: Option<&'a str>) -> Self {
        self.permissions.push(Permission::CorrectPassword(password));
        self
    }

    pub fn custom(
        mut self,
        label: &'static str,
        predicate: impl Fn(&User) -> bool + Send + Sync + 'a,
    ) -> Self {
        self.permissions
            .push(Permission::Custom(label, Box::new(predicate)));
        self
    }

    /// Resolves the session user and runs the chained checks.
    ///
    /// # Returns
    /// - `Ok(User)` - Every check passed
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session user was deleted
    /// - `Err(AuthError::AccessDenied)` - The first failing check
    /// - `Err(AppError)` - Database, session or password hash failure
    pub async fn require(self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in &self.permissions {
            if !permission.check(&user)? {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("failed {} check", permission.describe()),
                )
                .into());
            }
        }

        Ok(user)
    }
}

/// Only Admins may change an account's role.
pub fn no_role_edit(requested_role: Option<&str>) -> impl Fn(&User) -> bool + Send + Sync + '_ {
    move |user| requested_role.is_none() || user.is_admin()
}

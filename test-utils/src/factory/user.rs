//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use std::sync::OnceLock;

/// Password every factory user gets unless overridden.
pub const DEFAULT_PASSWORD: &str = "Password1";

/// Hash of `DEFAULT_PASSWORD`, computed once per test binary.
static DEFAULT_HASH: OnceLock<String> = OnceLock::new();

fn hash(password: &str) -> Result<String, DbErr> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(format!("Failed to hash test password: {}", e)))
}

fn default_hash() -> Result<String, DbErr> {
    if let Some(hash) = DEFAULT_HASH.get() {
        return Ok(hash.clone());
    }

    let hash = hash(DEFAULT_PASSWORD)?;
    Ok(DEFAULT_HASH.get_or_init(|| hash).clone())
}

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .username("Tester")
///     .role("Developer")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password: Option<String>,
    role: String,
    avatar_url: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password: `DEFAULT_PASSWORD`
    /// - role: `"User"`
    /// - avatar_url: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password: None,
            role: "User".to_string(),
            avatar_url: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets a plain-text password, hashed with Argon2 on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the stored role label, e.g. `"Project Manager"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let hash = match self.password {
            Some(password) => hash(&password)?,
            None => default_hash()?,
        };

        entity::user::ActiveModel {
            username_key: ActiveValue::Set(self.username.to_lowercase()),
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email.to_lowercase()),
            hash: ActiveValue::Set(hash),
            role: ActiveValue::Set(self.role),
            register_date: ActiveValue::Set(Utc::now()),
            avatar_url: ActiveValue::Set(self.avatar_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user holding the given role.
///
/// Shorthand for `UserFactory::new(db).role(role).build().await`.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}

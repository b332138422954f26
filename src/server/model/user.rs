//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UserDto, UserRole},
    server::{
        error::{internal::InternalError, AppError},
        model::query::SortField,
    },
};

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Stored lowercased.
    pub email: String,
    /// Argon2 PHC string.
    pub hash: String,
    pub role: UserRole,
    pub register_date: DateTime<Utc>,
    pub avatar_url: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(AppError::InternalErr(UnknownEnumValue))` - The stored role does
    ///   not name a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = UserRole::parse(&entity.role).ok_or_else(|| InternalError::UnknownEnumValue {
            kind: "role",
            value: entity.role.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            hash: entity.hash,
            role,
            register_date: entity.register_date,
            avatar_url: entity.avatar_url,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts the user to its JSON projection.
    ///
    /// The email address is only included in the private view, which is
    /// returned to the owner of the account.
    pub fn into_dto(self, private: bool) -> UserDto {
        UserDto {
            id: self.id,
            url: format!("/users/{}", self.id),
            username: self.username,
            email: private.then_some(self.email),
            role: self.role,
            register_date: self.register_date,
            avatar_url: self.avatar_url,
        }
    }
}

/// Fields a user collection can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    Id,
    Username,
    Role,
    RegisterDate,
    AvatarUrl,
}

impl SortField for UserSortField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "id" | "url" => Some(Self::Id),
            "username" => Some(Self::Username),
            "role" => Some(Self::Role),
            "registerDate" => Some(Self::RegisterDate),
            "avatarUrl" => Some(Self::AvatarUrl),
            _ => None,
        }
    }
}

/// Validated registration data.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub email: String,
    /// Plain text password, hashed by the service.
    pub password: String,
}

/// Row data for inserting a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub hash: String,
}

/// Validated account edit. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
    /// New plain text password.
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub avatar_url: Option<String>,
}

/// Column changes for updating a user row. `None` leaves a column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserChangeset {
    pub username: Option<String>,
    pub email: Option<String>,
    pub hash: Option<String>,
    pub role: Option<UserRole>,
    pub avatar_url: Option<String>,
}

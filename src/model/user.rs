use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field;

/// Account roles in ascending order of privilege.
///
/// The derived ordering follows declaration order, so `role >= required`
/// expresses "at least as privileged as".
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ToSchema,
)]
pub enum UserRole {
    #[default]
    User,
    Developer,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::User,
        UserRole::Developer,
        UserRole::ProjectManager,
        UserRole::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Developer => "Developer",
            Self::ProjectManager => "Project Manager",
            Self::Admin => "Admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub url: String,
    pub username: String,
    /// Only included when the requester owns the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: UserRole,
    pub register_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Registration form.
#[derive(Deserialize, Default, Debug, ToSchema)]
pub struct CreateUserDto {
    #[serde(default, deserialize_with = "field::text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub password: Option<String>,
    /// Must repeat `password`.
    #[serde(default, deserialize_with = "field::text")]
    pub confirm: Option<String>,
}

/// Account edit form. Every field except `password` is optional.
#[derive(Deserialize, Default, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    /// Current password of the account, re-verified before any change.
    #[serde(default, deserialize_with = "field::text")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub new_password: Option<String>,
    /// Must repeat `newPassword`.
    #[serde(default, deserialize_with = "field::text")]
    pub confirm: Option<String>,
    /// Only Admins may change roles.
    #[serde(default, deserialize_with = "field::text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub avatar_url: Option<String>,
}

/// Current password, required to delete an account.
#[derive(Deserialize, Default, Debug, ToSchema)]
pub struct DeleteUserDto {
    #[serde(default, deserialize_with = "field::text")]
    pub password: Option<String>,
}

/// Login form; `username` accepts either the username or the email.
#[derive(Deserialize, Default, Debug, ToSchema)]
pub struct LoginDto {
    #[serde(default, deserialize_with = "field::text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub password: Option<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{field, reference::RefDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i32,
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Manager id, or the manager's user JSON when populated. `null` once the
    /// manager's account has been deleted.
    #[schema(value_type = Option<Object>)]
    pub manager: Option<RefDto<UserDto>>,
    #[schema(value_type = Vec<Object>)]
    pub developers: Vec<RefDto<UserDto>>,
    pub create_date: DateTime<Utc>,
}

#[derive(Deserialize, Default, Debug, ToSchema)]
pub struct CreateProjectDto {
    #[serde(default, deserialize_with = "field::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub detail: Option<String>,
}

/// Project edit form; absent fields are left unchanged.
#[derive(Deserialize, Default, Debug, ToSchema)]
pub struct UpdateProjectDto {
    #[serde(default, deserialize_with = "field::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub detail: Option<String>,
    /// Replaces the developer list with these user ids.
    #[serde(default, deserialize_with = "field::text_list")]
    pub developers: Option<Vec<String>>,
}

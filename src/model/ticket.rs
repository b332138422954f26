use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{field, project::ProjectDto, reference::RefDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum TicketType {
    Feature,
    Issue,
    Task,
    Help,
}

impl TicketType {
    pub const ALL: [TicketType; 4] = [
        TicketType::Feature,
        TicketType::Issue,
        TicketType::Task,
        TicketType::Help,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::Issue => "Issue",
            Self::Task => "Task",
            Self::Help => "Help",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ToSchema)]
pub enum TicketStatus {
    #[default]
    Open,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 2] = [TicketStatus::Open, TicketStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum TicketPriority {
    High,
    Medium,
    Low,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 3] = [
        TicketPriority::High,
        TicketPriority::Medium,
        TicketPriority::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == value)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub id: i32,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: TicketType,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub title: String,
    pub detail: String,
    #[schema(value_type = Object)]
    pub project: RefDto<ProjectDto>,
    #[schema(value_type = Option<Object>)]
    pub submitter: Option<RefDto<UserDto>>,
    #[schema(value_type = Vec<Object>)]
    pub developers: Vec<RefDto<UserDto>>,
    pub create_date: DateTime<Utc>,
}

#[derive(Deserialize, Default, Debug, ToSchema)]
pub struct CreateTicketDto {
    #[serde(default, rename = "type", deserialize_with = "field::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub detail: Option<String>,
    /// Id of the project the ticket belongs to.
    #[serde(default, deserialize_with = "field::text")]
    pub project: Option<String>,
}

/// Ticket edit form; absent fields are left unchanged.
#[derive(Deserialize, Default, Debug, ToSchema)]
pub struct UpdateTicketDto {
    #[serde(default, rename = "type", deserialize_with = "field::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "field::text")]
    pub detail: Option<String>,
    /// Replaces the assigned developers with these user ids.
    #[serde(default, deserialize_with = "field::text_list")]
    pub developers: Option<Vec<String>>,
}

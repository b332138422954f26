//! Ticket domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::ticket::{TicketDto, TicketPriority, TicketStatus, TicketType},
    server::{
        error::{internal::InternalError, AppError},
        model::{project::Project, query::SortField, reference::Ref, user::User},
    },
};

/// Ticket filed against a project.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub kind: TicketType,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub title: String,
    pub detail: String,
    pub project: Ref<Project>,
    /// `None` once the submitter's account has been deleted.
    pub submitter: Option<Ref<User>>,
    pub developers: Vec<Ref<User>>,
    pub create_date: DateTime<Utc>,
}

impl Ticket {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - References unpopulated
    /// - `Err(AppError::InternalErr(UnknownEnumValue))` - A stored type,
    ///   status or priority is not a known value
    pub fn from_entity(
        entity: entity::ticket::Model,
        developer_ids: Vec<i32>,
    ) -> Result<Self, AppError> {
        let kind = TicketType::parse(&entity.kind).ok_or_else(|| unknown("type", &entity.kind))?;
        let status =
            TicketStatus::parse(&entity.status).ok_or_else(|| unknown("status", &entity.status))?;
        let priority = TicketPriority::parse(&entity.priority)
            .ok_or_else(|| unknown("priority", &entity.priority))?;

        Ok(Self {
            id: entity.id,
            kind,
            status,
            priority,
            title: entity.title,
            detail: entity.detail,
            project: Ref::Id(entity.project_id),
            submitter: entity.submitter_id.map(Ref::Id),
            developers: developer_ids.into_iter().map(Ref::Id).collect(),
            create_date: entity.create_date,
        })
    }

    pub fn project_id(&self) -> i32 {
        match &self.project {
            Ref::Id(id) => *id,
            Ref::Populated(project) => project.id,
        }
    }

    pub fn submitter_id(&self) -> Option<i32> {
        self.submitter.as_ref().map(ref_user_id)
    }

    pub fn developer_ids(&self) -> Vec<i32> {
        self.developers.iter().map(ref_user_id).collect()
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            url: format!("/tickets/{}", self.id),
            kind: self.kind,
            status: self.status,
            priority: self.priority,
            title: self.title,
            detail: self.detail,
            project: self.project.into_dto(Project::into_dto),
            submitter: self
                .submitter
                .map(|s| s.into_dto(|user| user.into_dto(false))),
            developers: self
                .developers
                .into_iter()
                .map(|d| d.into_dto(|user| user.into_dto(false)))
                .collect(),
            create_date: self.create_date,
        }
    }
}

fn unknown(kind: &'static str, value: &str) -> InternalError {
    InternalError::UnknownEnumValue {
        kind,
        value: value.to_string(),
    }
}

fn ref_user_id(reference: &Ref<User>) -> i32 {
    match reference {
        Ref::Id(id) => *id,
        Ref::Populated(user) => user.id,
    }
}

/// Fields a ticket collection can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketSortField {
    Id,
    Type,
    Status,
    Priority,
    Title,
    Detail,
    Project,
    Submitter,
    Developers,
    CreateDate,
}

impl SortField for TicketSortField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "id" | "url" => Some(Self::Id),
            "type" => Some(Self::Type),
            "status" => Some(Self::Status),
            "priority" => Some(Self::Priority),
            "title" => Some(Self::Title),
            "detail" => Some(Self::Detail),
            "project" => Some(Self::Project),
            "submitter" => Some(Self::Submitter),
            "developers" => Some(Self::Developers),
            "createDate" => Some(Self::CreateDate),
            _ => None,
        }
    }
}

/// Validated data for a new ticket.
#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub kind: TicketType,
    pub priority: TicketPriority,
    pub title: String,
    pub detail: String,
    pub project_id: i32,
    pub submitter_id: i32,
}

/// Validated ticket edit. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateTicketParams {
    pub kind: Option<TicketType>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub title: Option<String>,
    pub detail: Option<String>,
    /// Replaces the assigned developers.
    pub developer_ids: Option<Vec<i32>>,
}

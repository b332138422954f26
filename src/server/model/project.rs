//! Project domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::project::ProjectDto,
    server::model::{query::SortField, reference::Ref, user::User},
};

/// Project with its manager and developer references.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub detail: Option<String>,
    /// `None` once the manager's account has been deleted.
    pub manager: Option<Ref<User>>,
    pub developers: Vec<Ref<User>>,
    pub create_date: DateTime<Utc>,
}

impl Project {
    /// Converts an entity model at the repository boundary.
    ///
    /// References are left unpopulated; developer ids are loaded separately
    /// from the join table.
    pub fn from_entity(entity: entity::project::Model, developer_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            detail: entity.detail,
            manager: entity.manager_id.map(Ref::Id),
            developers: developer_ids.into_iter().map(Ref::Id).collect(),
            create_date: entity.create_date,
        }
    }

    pub fn manager_id(&self) -> Option<i32> {
        self.manager.as_ref().map(|manager| match manager {
            Ref::Id(id) => *id,
            Ref::Populated(user) => user.id,
        })
    }

    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            url: format!("/projects/{}", self.id),
            title: self.title,
            detail: self.detail,
            manager: self.manager.map(|m| m.into_dto(|user| user.into_dto(false))),
            developers: self
                .developers
                .into_iter()
                .map(|d| d.into_dto(|user| user.into_dto(false)))
                .collect(),
            create_date: self.create_date,
        }
    }
}

/// Fields a project collection can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSortField {
    Id,
    Title,
    Detail,
    Manager,
    Developers,
    CreateDate,
}

impl SortField for ProjectSortField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "id" | "url" => Some(Self::Id),
            "title" => Some(Self::Title),
            "detail" => Some(Self::Detail),
            "manager" => Some(Self::Manager),
            "developers" => Some(Self::Developers),
            "createDate" => Some(Self::CreateDate),
            _ => None,
        }
    }
}

/// Validated data for a new project.
#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub title: String,
    pub detail: Option<String>,
    pub manager_id: i32,
}

/// Validated project edit. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParams {
    pub title: Option<String>,
    pub detail: Option<String>,
    /// Replaces the developer list.
    pub developer_ids: Option<Vec<i32>>,
}

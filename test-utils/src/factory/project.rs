//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let project = ProjectFactory::new(&db, manager.id)
///     .title("Bug Tracker")
///     .detail("Tracks bugs")
///     .build()
///     .await?;
/// ```
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    detail: Option<String>,
    manager_id: Option<i32>,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory managed by `manager_id`.
    ///
    /// Defaults:
    /// - title: `"Project {id}"`
    /// - detail: `None`
    pub fn new(db: &'a DatabaseConnection, manager_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Project {}", id),
            detail: None,
            manager_id: Some(manager_id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Creates the project without a manager, as if the manager was deleted.
    pub fn without_manager(mut self) -> Self {
        self.manager_id = None;
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            title_key: ActiveValue::Set(self.title.to_lowercase()),
            title: ActiveValue::Set(self.title),
            detail: ActiveValue::Set(self.detail),
            manager_id: ActiveValue::Set(self.manager_id),
            create_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values managed by `manager_id`.
pub async fn create_project(
    db: &DatabaseConnection,
    manager_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db, manager_id).build().await
}

/// Assigns a user as developer of a project.
pub async fn assign_project_developer(
    db: &DatabaseConnection,
    project_id: i32,
    user_id: i32,
) -> Result<entity::project_developer::Model, DbErr> {
    entity::project_developer::ActiveModel {
        project_id: ActiveValue::Set(project_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}

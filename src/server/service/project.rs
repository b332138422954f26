//! Project service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{project::ProjectRepository, user::UserRepository},
    error::AppError,
    model::{
        project::{CreateProjectParams, Project, ProjectSortField, UpdateProjectParams},
        query::ListParams,
        reference::Ref,
        user::User,
    },
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, AppError> {
        Ok(ProjectRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(
        &self,
        params: &ListParams<ProjectSortField>,
    ) -> Result<Vec<Project>, AppError> {
        Ok(ProjectRepository::new(self.db).get_paginated(params).await?)
    }

    /// Gets a project with references left as ids.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Project>, AppError> {
        Ok(ProjectRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets a project with its manager and developers loaded.
    pub async fn get_populated(&self, id: i32) -> Result<Option<Project>, AppError> {
        let Some(mut project) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut refs: Vec<Ref<User>> = project.manager.take().into_iter().collect();
        let has_manager = !refs.is_empty();
        refs.append(&mut project.developers);

        let mut populated = populate_users(self.db, refs).await?;
        if has_manager && !populated.is_empty() {
            project.manager = Some(populated.remove(0));
        }
        project.developers = populated;

        Ok(Some(project))
    }

    /// # Returns
    /// - `Ok(Some(Project))` - The updated project
    /// - `Ok(None)` - No project with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProjectParams,
    ) -> Result<Option<Project>, AppError> {
        Ok(ProjectRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes a project and its tickets. Returns `false` if it did not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ProjectRepository::new(self.db).delete(id).await?)
    }
}

/// Replaces user ids with the loaded users, keeping order.
///
/// Ids whose user no longer exists stay unpopulated.
pub(crate) async fn populate_users(
    db: &DatabaseConnection,
    refs: Vec<Ref<User>>,
) -> Result<Vec<Ref<User>>, AppError> {
    let ids: Vec<i32> = refs
        .iter()
        .filter_map(|reference| match reference {
            Ref::Id(id) => Some(*id),
            Ref::Populated(_) => None,
        })
        .collect();

    let users = UserRepository::new(db).find_by_ids(&ids).await?;

    Ok(refs
        .into_iter()
        .map(|reference| match reference {
            Ref::Id(id) => users
                .iter()
                .find(|user| user.id == id)
                .cloned()
                .map_or(Ref::Id(id), Ref::Populated),
            populated => populated,
        })
        .collect())
}

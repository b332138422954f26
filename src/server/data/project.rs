//! Project data repository.
//!
//! Developer lists live in the `project_developer` join table and are loaded
//! alongside each project as plain user ids.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    project::{CreateProjectParams, Project, ProjectSortField, UpdateProjectParams},
    query::ListParams,
};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a project without developers.
    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, DbErr> {
        let entity = entity::project::ActiveModel {
            title_key: ActiveValue::Set(params.title.to_lowercase()),
            title: ActiveValue::Set(params.title),
            detail: ActiveValue::Set(params.detail),
            manager_id: ActiveValue::Set(Some(params.manager_id)),
            create_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Project::from_entity(entity, Vec::new()))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let Some(entity) = entity::prelude::Project::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let developer_ids = developer_ids(self.db, id).await?;

        Ok(Some(Project::from_entity(entity, developer_ids)))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Project::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether `title` is used by any project other than `exclude`,
    /// ignoring case.
    pub async fn title_taken(&self, title: &str, exclude: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Project::find()
            .filter(entity::project::Column::TitleKey.eq(title.to_lowercase()));
        if let Some(id) = exclude {
            query = query.filter(entity::project::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets one page of projects, ordered by the requested keys and then by id.
    pub async fn get_paginated(
        &self,
        params: &ListParams<ProjectSortField>,
    ) -> Result<Vec<Project>, DbErr> {
        let mut query = entity::prelude::Project::find();
        for key in &params.sort {
            let column = match key.field {
                ProjectSortField::Id => entity::project::Column::Id,
                ProjectSortField::Title => entity::project::Column::TitleKey,
                ProjectSortField::Detail => entity::project::Column::Detail,
                ProjectSortField::Manager => entity::project::Column::ManagerId,
                // Developer lists have no scalar order; rows keep the id order.
                ProjectSortField::Developers => continue,
                ProjectSortField::CreateDate => entity::project::Column::CreateDate,
            };
            query = query.order_by(column, key.direction.order());
        }

        let projects = query
            .order_by_asc(entity::project::Column::Id)
            .paginate(self.db, params.limit)
            .fetch_page(params.page.saturating_sub(1))
            .await?;

        let ids: Vec<i32> = projects.iter().map(|project| project.id).collect();
        let mut developers = developer_ids_for(self.db, &ids).await?;

        Ok(projects
            .into_iter()
            .map(|project| {
                let developer_ids = developers.remove(&project.id).unwrap_or_default();
                Project::from_entity(project, developer_ids)
            })
            .collect())
    }

    /// Updates project `id`.
    ///
    /// A given developer list replaces the current one. An empty detail
    /// clears it.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - The updated project
    /// - `Ok(None)` - No project with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProjectParams,
    ) -> Result<Option<Project>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(project) = entity::prelude::Project::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active_model: entity::project::ActiveModel = project.into();
        if let Some(title) = params.title {
            active_model.title_key = ActiveValue::Set(title.to_lowercase());
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(detail) = params.detail {
            active_model.detail = ActiveValue::Set(Some(detail).filter(|d| !d.is_empty()));
        }
        let entity = active_model.update(&txn).await?;

        if let Some(user_ids) = params.developer_ids {
            entity::prelude::ProjectDeveloper::delete_many()
                .filter(entity::project_developer::Column::ProjectId.eq(id))
                .exec(&txn)
                .await?;

            for user_id in user_ids {
                entity::project_developer::ActiveModel {
                    project_id: ActiveValue::Set(id),
                    user_id: ActiveValue::Set(user_id),
                }
                .insert(&txn)
                .await?;
            }
        }

        let developer_ids = developer_ids(&txn, id).await?;
        txn.commit().await?;

        Ok(Some(Project::from_entity(entity, developer_ids)))
    }

    /// Deletes project `id` together with its tickets.
    ///
    /// # Returns
    /// - `Ok(true)` - Project deleted
    /// - `Ok(false)` - No project with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let ticket_ids: Vec<i32> = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ProjectId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|ticket| ticket.id)
            .collect();

        entity::prelude::TicketDeveloper::delete_many()
            .filter(entity::ticket_developer::Column::TicketId.is_in(ticket_ids))
            .exec(&txn)
            .await?;

        entity::prelude::Ticket::delete_many()
            .filter(entity::ticket::Column::ProjectId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::ProjectDeveloper::delete_many()
            .filter(entity::project_developer::Column::ProjectId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Project::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

async fn developer_ids<C: ConnectionTrait>(db: &C, project_id: i32) -> Result<Vec<i32>, DbErr> {
    Ok(developer_ids_for(db, &[project_id])
        .await?
        .remove(&project_id)
        .unwrap_or_default())
}

/// Loads developer ids for several projects with a single query.
async fn developer_ids_for<C: ConnectionTrait>(
    db: &C,
    project_ids: &[i32],
) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
    let mut developers: HashMap<i32, Vec<i32>> = HashMap::new();
    if project_ids.is_empty() {
        return Ok(developers);
    }

    let rows = entity::prelude::ProjectDeveloper::find()
        .filter(entity::project_developer::Column::ProjectId.is_in(project_ids.iter().copied()))
        .order_by_asc(entity::project_developer::Column::UserId)
        .all(db)
        .await?;

    for row in rows {
        developers.entry(row.project_id).or_default().push(row.user_id);
    }

    Ok(developers)
}

//! Ticket data repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    model::ticket::TicketStatus,
    server::{
        error::AppError,
        model::{
            query::ListParams,
            ticket::{CreateTicketParams, Ticket, TicketSortField, UpdateTicketParams},
        },
    },
};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an open ticket without assigned developers.
    pub async fn create(&self, params: CreateTicketParams) -> Result<Ticket, AppError> {
        let entity = entity::ticket::ActiveModel {
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            status: ActiveValue::Set(TicketStatus::default().as_str().to_string()),
            priority: ActiveValue::Set(params.priority.as_str().to_string()),
            title: ActiveValue::Set(params.title),
            detail: ActiveValue::Set(params.detail),
            project_id: ActiveValue::Set(params.project_id),
            submitter_id: ActiveValue::Set(Some(params.submitter_id)),
            create_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ticket::from_entity(entity, Vec::new())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Ticket>, AppError> {
        let Some(entity) = entity::prelude::Ticket::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let developer_ids = developer_ids(self.db, id).await?;

        Ticket::from_entity(entity, developer_ids).map(Some)
    }

    /// Gets one page of tickets, optionally restricted to one project.
    pub async fn get_paginated(
        &self,
        params: &ListParams<TicketSortField>,
        project_id: Option<i32>,
    ) -> Result<Vec<Ticket>, AppError> {
        let mut query = entity::prelude::Ticket::find();
        if let Some(project_id) = project_id {
            query = query.filter(entity::ticket::Column::ProjectId.eq(project_id));
        }
        for key in &params.sort {
            let column = match key.field {
                TicketSortField::Id => entity::ticket::Column::Id,
                TicketSortField::Type => entity::ticket::Column::Kind,
                TicketSortField::Status => entity::ticket::Column::Status,
                TicketSortField::Priority => entity::ticket::Column::Priority,
                TicketSortField::Title => entity::ticket::Column::Title,
                TicketSortField::Detail => entity::ticket::Column::Detail,
                TicketSortField::Project => entity::ticket::Column::ProjectId,
                TicketSortField::Submitter => entity::ticket::Column::SubmitterId,
                // Developer lists have no scalar order; rows keep the id order.
                TicketSortField::Developers => continue,
                TicketSortField::CreateDate => entity::ticket::Column::CreateDate,
            };
            query = query.order_by(column, key.direction.order());
        }

        let tickets = query
            .order_by_asc(entity::ticket::Column::Id)
            .paginate(self.db, params.limit)
            .fetch_page(params.page.saturating_sub(1))
            .await?;

        let ids: Vec<i32> = tickets.iter().map(|ticket| ticket.id).collect();
        let mut developers = developer_ids_for(self.db, &ids).await?;

        tickets
            .into_iter()
            .map(|ticket| {
                let developer_ids = developers.remove(&ticket.id).unwrap_or_default();
                Ticket::from_entity(ticket, developer_ids)
            })
            .collect()
    }

    /// Updates ticket `id`; a given developer list replaces the current one.
    ///
    /// # Returns
    /// - `Ok(Some(Ticket))` - The updated ticket
    /// - `Ok(None)` - No ticket with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTicketParams,
    ) -> Result<Option<Ticket>, AppError> {
        let txn = self.db.begin().await?;

        let Some(ticket) = entity::prelude::Ticket::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active_model: entity::ticket::ActiveModel = ticket.into();
        if let Some(kind) = params.kind {
            active_model.kind = ActiveValue::Set(kind.as_str().to_string());
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(priority) = params.priority {
            active_model.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(detail) = params.detail {
            active_model.detail = ActiveValue::Set(detail);
        }
        let entity = active_model.update(&txn).await?;

        if let Some(user_ids) = params.developer_ids {
            entity::prelude::TicketDeveloper::delete_many()
                .filter(entity::ticket_developer::Column::TicketId.eq(id))
                .exec(&txn)
                .await?;

            for user_id in user_ids {
                entity::ticket_developer::ActiveModel {
                    ticket_id: ActiveValue::Set(id),
                    user_id: ActiveValue::Set(user_id),
                }
                .insert(&txn)
                .await?;
            }
        }

        let developer_ids = developer_ids(&txn, id).await?;
        txn.commit().await?;

        Ticket::from_entity(entity, developer_ids).map(Some)
    }

    /// Deletes ticket `id` and its developer assignments.
    ///
    /// # Returns
    /// - `Ok(true)` - Ticket deleted
    /// - `Ok(false)` - No ticket with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::TicketDeveloper::delete_many()
            .filter(entity::ticket_developer::Column::TicketId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Ticket::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

async fn developer_ids<C: ConnectionTrait>(db: &C, ticket_id: i32) -> Result<Vec<i32>, DbErr> {
    Ok(developer_ids_for(db, &[ticket_id])
        .await?
        .remove(&ticket_id)
        .unwrap_or_default())
}

async fn developer_ids_for<C: ConnectionTrait>(
    db: &C,
    ticket_ids: &[i32],
) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
    let mut developers: HashMap<i32, Vec<i32>> = HashMap::new();
    if ticket_ids.is_empty() {
        return Ok(developers);
    }

    let rows = entity::prelude::TicketDeveloper::find()
        .filter(entity::ticket_developer::Column::TicketId.is_in(ticket_ids.iter().copied()))
        .order_by_asc(entity::ticket_developer::Column::UserId)
        .all(db)
        .await?;

    for row in rows {
        developers.entry(row.ticket_id).or_default().push(row.user_id);
    }

    Ok(developers)
}

//! Ticket service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{project::ProjectRepository, ticket::TicketRepository},
    error::AppError,
    model::{
        query::ListParams,
        reference::Ref,
        ticket::{CreateTicketParams, Ticket, TicketSortField, UpdateTicketParams},
        user::User,
    },
    service::project::populate_users,
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTicketParams) -> Result<Ticket, AppError> {
        TicketRepository::new(self.db).create(params).await
    }

    pub async fn get_all(
        &self,
        params: &ListParams<TicketSortField>,
        project_id: Option<i32>,
    ) -> Result<Vec<Ticket>, AppError> {
        TicketRepository::new(self.db)
            .get_paginated(params, project_id)
            .await
    }

    /// Gets a ticket with references left as ids.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Ticket>, AppError> {
        TicketRepository::new(self.db).find_by_id(id).await
    }

    /// Gets a ticket with its project, submitter and developers loaded.
    ///
    /// The embedded project keeps its own references as ids.
    pub async fn get_populated(&self, id: i32) -> Result<Option<Ticket>, AppError> {
        let Some(mut ticket) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(project) = ProjectRepository::new(self.db)
            .find_by_id(ticket.project_id())
            .await?
        {
            ticket.project = Ref::Populated(project);
        }

        let mut refs: Vec<Ref<User>> = ticket.submitter.take().into_iter().collect();
        let has_submitter = !refs.is_empty();
        refs.append(&mut ticket.developers);

        let mut populated = populate_users(self.db, refs).await?;
        if has_submitter && !populated.is_empty() {
            ticket.submitter = Some(populated.remove(0));
        }
        ticket.developers = populated;

        Ok(Some(ticket))
    }

    /// # Returns
    /// - `Ok(Some(Ticket))` - The updated ticket
    /// - `Ok(None)` - No ticket with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTicketParams,
    ) -> Result<Option<Ticket>, AppError> {
        TicketRepository::new(self.db).update(id, params).await
    }

    /// Deletes a ticket. Returns `false` if it did not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        TicketRepository::new(self.db).delete(id).await
    }
}

//! Ticket factory for creating test ticket entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let ticket = TicketFactory::new(&db, project.id, submitter.id)
///     .kind("Issue")
///     .priority("High")
///     .build()
///     .await?;
/// ```
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    project_id: i32,
    submitter_id: Option<i32>,
    kind: String,
    status: String,
    priority: String,
    title: String,
    detail: String,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory for a project and submitter.
    ///
    /// Defaults:
    /// - kind: `"Task"`, status: `"Open"`, priority: `"Medium"`
    /// - title: `"Ticket {id}"`, detail: `"Detail of ticket {id}"`
    pub fn new(db: &'a DatabaseConnection, project_id: i32, submitter_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            project_id,
            submitter_id: Some(submitter_id),
            kind: "Task".to_string(),
            status: "Open".to_string(),
            priority: "Medium".to_string(),
            title: format!("Ticket {}", id),
            detail: format!("Detail of ticket {}", id),
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Builds and inserts the ticket entity into the database.
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            kind: ActiveValue::Set(self.kind),
            status: ActiveValue::Set(self.status),
            priority: ActiveValue::Set(self.priority),
            title: ActiveValue::Set(self.title),
            detail: ActiveValue::Set(self.detail),
            project_id: ActiveValue::Set(self.project_id),
            submitter_id: ActiveValue::Set(self.submitter_id),
            create_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket with default values.
pub async fn create_ticket(
    db: &DatabaseConnection,
    project_id: i32,
    submitter_id: i32,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, project_id, submitter_id)
        .build()
        .await
}

/// Assigns a user as developer of a ticket.
pub async fn assign_ticket_developer(
    db: &DatabaseConnection,
    ticket_id: i32,
    user_id: i32,
) -> Result<entity::ticket_developer::Model, DbErr> {
    entity::ticket_developer::ActiveModel {
        ticket_id: ActiveValue::Set(ticket_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}

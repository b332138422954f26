use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_project_table::Project,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(string(Ticket::Kind))
                    .col(string(Ticket::Status))
                    .col(string(Ticket::Priority))
                    .col(string(Ticket::Title))
                    .col(text(Ticket::Detail))
                    .col(integer(Ticket::ProjectId))
                    .col(integer_null(Ticket::SubmitterId))
                    .col(timestamp_with_time_zone(Ticket::CreateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_project_id")
                            .from(Ticket::Table, Ticket::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_submitter_id")
                            .from(Ticket::Table, Ticket::SubmitterId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    Kind,
    Status,
    Priority,
    Title,
    Detail,
    ProjectId,
    SubmitterId,
    CreateDate,
}

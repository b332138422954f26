use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000004_create_ticket_table::Ticket,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketDeveloper::Table)
                    .if_not_exists()
                    .col(integer(TicketDeveloper::TicketId))
                    .col(integer(TicketDeveloper::UserId))
                    .primary_key(
                        Index::create()
                            .col(TicketDeveloper::TicketId)
                            .col(TicketDeveloper::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_developer_ticket_id")
                            .from(TicketDeveloper::Table, TicketDeveloper::TicketId)
                            .to(Ticket::Table, Ticket::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_developer_user_id")
                            .from(TicketDeveloper::Table, TicketDeveloper::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketDeveloper::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TicketDeveloper {
    Table,
    TicketId,
    UserId,
}

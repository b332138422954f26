use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(string(Project::Title))
                    .col(string_uniq(Project::TitleKey))
                    .col(text_null(Project::Detail))
                    .col(integer_null(Project::ManagerId))
                    .col(timestamp_with_time_zone(Project::CreateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_manager_id")
                            .from(Project::Table, Project::ManagerId)
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
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Project {
    Table,
    Id,
    Title,
    TitleKey,
    Detail,
    ManagerId,
    CreateDate,
}

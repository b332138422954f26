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
                    .table(ProjectDeveloper::Table)
                    .if_not_exists()
                    .col(integer(ProjectDeveloper::ProjectId))
                    .col(integer(ProjectDeveloper::UserId))
                    .primary_key(
                        Index::create()
                            .col(ProjectDeveloper::ProjectId)
                            .col(ProjectDeveloper::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_developer_project_id")
                            .from(ProjectDeveloper::Table, ProjectDeveloper::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_developer_user_id")
                            .from(ProjectDeveloper::Table, ProjectDeveloper::UserId)
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
            .drop_table(Table::drop().table(ProjectDeveloper::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectDeveloper {
    Table,
    ProjectId,
    UserId,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Username))
                    .col(string_uniq(User::UsernameKey))
                    .col(string_uniq(User::Email))
                    .col(string(User::Hash))
                    .col(string(User::Role))
                    .col(timestamp_with_time_zone(User::RegisterDate))
                    .col(string_null(User::AvatarUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    UsernameKey,
    Email,
    Hash,
    Role,
    RegisterDate,
    AvatarUrl,
}

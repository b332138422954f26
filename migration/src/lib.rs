pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_project_table;
mod m20250301_000003_create_project_developer_table;
mod m20250301_000004_create_ticket_table;
mod m20250301_000005_create_ticket_developer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_project_table::Migration),
            Box::new(m20250301_000003_create_project_developer_table::Migration),
            Box::new(m20250301_000004_create_ticket_table::Migration),
            Box::new(m20250301_000005_create_ticket_developer_table::Migration),
        ]
    }
}

//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a Project Manager and a project managed by them.
///
/// # Returns
/// - `Ok((manager, project))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_project_with_manager(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::project::Model), DbErr> {
    let manager = crate::factory::user::UserFactory::new(db)
        .role("Project Manager")
        .build()
        .await?;
    let project = crate::factory::project::create_project(db, manager.id).await?;

    Ok((manager, project))
}

/// Creates a managed project and a ticket submitted by its manager.
///
/// # Returns
/// - `Ok((manager, project, ticket))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ticket_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::project::Model,
        entity::ticket::Model,
    ),
    DbErr,
> {
    let (manager, project) = create_project_with_manager(db).await?;
    let ticket = crate::factory::ticket::create_ticket(db, project.id, manager.id).await?;

    Ok((manager, project, ticket))
}

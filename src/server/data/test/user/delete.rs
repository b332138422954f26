use super::*;
use sea_orm::EntityTrait;

/// Tests that deleting a user keeps their projects and tickets.
///
/// Verifies that manager and submitter references are cleared and developer
/// assignments are removed.
///
/// Expected: Ok(true) and dangling references nulled
#[tokio::test]
async fn clears_references_to_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project, ticket) =
        factory::helpers::create_ticket_with_dependencies(db).await?;
    factory::assign_project_developer(db, project.id, manager.id).await?;
    factory::assign_ticket_developer(db, ticket.id, manager.id).await?;

    let deleted = UserRepository::new(db).delete(manager.id).await?;
    assert!(deleted);

    let project = entity::prelude::Project::find_by_id(project.id)
        .one(db)
        .await?
        .unwrap();
    let ticket = entity::prelude::Ticket::find_by_id(ticket.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(project.manager_id, None);
    assert_eq!(ticket.submitter_id, None);

    let project_developers = entity::prelude::ProjectDeveloper::find().all(db).await?;
    let ticket_developers = entity::prelude::TicketDeveloper::find().all(db).await?;
    assert!(project_developers.is_empty());
    assert!(ticket_developers.is_empty());

    Ok(())
}

/// Tests deleting a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).delete(42).await?);

    Ok(())
}

use super::*;

/// Tests loading a ticket with its assigned developers.
///
/// Expected: Ok(Some) with developer ids
#[tokio::test]
async fn loads_ticket_with_developers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ticket) = factory::helpers::create_ticket_with_dependencies(db).await?;
    let developer = factory::create_user(db).await?;
    factory::assign_ticket_developer(db, ticket.id, developer.id).await?;

    let found = TicketRepository::new(db)
        .find_by_id(ticket.id)
        .await?
        .unwrap();

    assert_eq!(found.title, ticket.title);
    assert_eq!(found.developer_ids(), vec![developer.id]);

    Ok(())
}

/// Tests that an unknown stored type is an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project) = factory::helpers::create_project_with_manager(db).await?;
    let ticket = factory::ticket::TicketFactory::new(db, project.id, manager.id)
        .kind("Chore")
        .build()
        .await?;

    let result = TicketRepository::new(db).find_by_id(ticket.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

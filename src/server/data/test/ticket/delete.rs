use super::*;

/// Tests deleting a ticket.
///
/// Expected: Ok(true), then the ticket is gone
#[tokio::test]
async fn deletes_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _, ticket) = factory::helpers::create_ticket_with_dependencies(db).await?;
    factory::assign_ticket_developer(db, ticket.id, manager.id).await?;

    let repo = TicketRepository::new(db);
    assert!(repo.delete(ticket.id).await?);
    assert!(repo.find_by_id(ticket.id).await?.is_none());
    assert!(!repo.delete(ticket.id).await?);

    Ok(())
}

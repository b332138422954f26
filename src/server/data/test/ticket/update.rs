use super::*;

/// Tests closing a ticket and assigning developers.
///
/// Expected: Ok(Some) with the new status and developers, other fields kept
#[tokio::test]
async fn updates_status_and_developers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ticket) = factory::helpers::create_ticket_with_dependencies(db).await?;
    let developer = factory::create_user(db).await?;

    let updated = TicketRepository::new(db)
        .update(
            ticket.id,
            UpdateTicketParams {
                status: Some(TicketStatus::Closed),
                developer_ids: Some(vec![developer.id]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, TicketStatus::Closed);
    assert_eq!(updated.title, ticket.title);
    assert_eq!(updated.developer_ids(), vec![developer.id]);

    Ok(())
}

/// Tests updating a missing ticket.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TicketRepository::new(db)
        .update(9, UpdateTicketParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

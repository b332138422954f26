use super::*;

/// Tests creating a ticket.
///
/// Expected: Ok with an open ticket referencing project and submitter by id
#[tokio::test]
async fn creates_open_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project) = factory::helpers::create_project_with_manager(db).await?;

    let ticket = TicketRepository::new(db)
        .create(CreateTicketParams {
            kind: TicketType::Issue,
            priority: TicketPriority::High,
            title: "Crash on login".to_string(),
            detail: "Steps to reproduce".to_string(),
            project_id: project.id,
            submitter_id: manager.id,
        })
        .await?;

    assert_eq!(ticket.kind, TicketType::Issue);
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.priority, TicketPriority::High);
    assert_eq!(ticket.project, Ref::Id(project.id));
    assert_eq!(ticket.submitter, Some(Ref::Id(manager.id)));
    assert!(ticket.developers.is_empty());

    Ok(())
}

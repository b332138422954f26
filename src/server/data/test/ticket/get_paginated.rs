use super::*;

/// Tests the project filter.
///
/// Expected: Ok with only the tickets of the requested project
#[tokio::test]
async fn filters_by_project() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, first, ticket) = factory::helpers::create_ticket_with_dependencies(db).await?;
    let second = factory::create_project(db, manager.id).await?;
    factory::create_ticket(db, second.id, manager.id).await?;

    let repo = TicketRepository::new(db);
    let filtered = repo
        .get_paginated(&ListParams::default(), Some(first.id))
        .await?;
    let all = repo.get_paginated(&ListParams::default(), None).await?;

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, ticket.id);
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests sorting by priority then id descending.
///
/// Expected: Ok with tickets ordered by the stored priority label
#[tokio::test]
async fn sorts_by_multiple_keys() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project) = factory::helpers::create_project_with_manager(db).await?;
    let mut ids = Vec::new();
    for priority in ["Low", "High", "Low"] {
        let ticket = factory::ticket::TicketFactory::new(db, project.id, manager.id)
            .priority(priority)
            .build()
            .await?;
        ids.push(ticket.id);
    }

    let tickets = TicketRepository::new(db)
        .get_paginated(
            &ListParams {
                limit: 20,
                page: 1,
                sort: vec![
                    SortKey {
                        field: TicketSortField::Priority,
                        direction: SortDirection::Asc,
                    },
                    SortKey {
                        field: TicketSortField::Id,
                        direction: SortDirection::Desc,
                    },
                ],
            },
            None,
        )
        .await?;

    let order: Vec<i32> = tickets.iter().map(|t| t.id).collect();
    assert_eq!(order, vec![ids[1], ids[2], ids[0]]);

    Ok(())
}

use super::*;

/// Tests sorting by title and paging.
///
/// Expected: Ok with the second page of projects sorted by title
#[tokio::test]
async fn sorts_and_pages_projects() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    for title in ["Delta", "alpha", "Charlie", "bravo"] {
        factory::project::ProjectFactory::new(db, manager.id)
            .title(title)
            .build()
            .await?;
    }

    let projects = ProjectRepository::new(db)
        .get_paginated(&ListParams {
            limit: 2,
            page: 2,
            sort: vec![SortKey {
                field: ProjectSortField::Title,
                direction: SortDirection::Asc,
            }],
        })
        .await?;

    let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Charlie", "Delta"]);

    Ok(())
}

/// Tests that developers are loaded for every project on the page.
///
/// Expected: Ok with each project's own developer ids
#[tokio::test]
async fn loads_developers_per_project() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_project_with_manager(db).await?;
    let (_, second) = factory::helpers::create_project_with_manager(db).await?;
    let developer = factory::create_user(db).await?;
    factory::assign_project_developer(db, second.id, developer.id).await?;

    let projects = ProjectRepository::new(db)
        .get_paginated(&ListParams::default())
        .await?;

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, first.id);
    assert!(projects[0].developers.is_empty());
    assert_eq!(projects[1].developers, vec![Ref::Id(developer.id)]);

    Ok(())
}

/// Tests sorting by the developer list.
///
/// Expected: Ok with projects in id order for either direction
#[tokio::test]
async fn developer_sort_keeps_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_project_with_manager(db).await?;
    let (_, second) = factory::helpers::create_project_with_manager(db).await?;
    let developer = factory::create_user(db).await?;
    factory::assign_project_developer(db, first.id, developer.id).await?;

    let projects = ProjectRepository::new(db)
        .get_paginated(&ListParams {
            sort: vec![SortKey {
                field: ProjectSortField::Developers,
                direction: SortDirection::Desc,
            }],
            ..ListParams::default()
        })
        .await?;

    let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

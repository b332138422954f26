use super::*;

/// Tests that developer ids are loaded from the join table.
///
/// Expected: Ok(Some) with developers ordered by id
#[tokio::test]
async fn loads_developer_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_manager(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::assign_project_developer(db, project.id, second.id).await?;
    factory::assign_project_developer(db, project.id, first.id).await?;

    let found = ProjectRepository::new(db)
        .find_by_id(project.id)
        .await?
        .unwrap();

    assert_eq!(
        found.developers,
        vec![Ref::Id(first.id), Ref::Id(second.id)]
    );

    Ok(())
}

/// Tests lookup of a missing project.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_project() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ProjectRepository::new(db).find_by_id(7).await?.is_none());

    Ok(())
}

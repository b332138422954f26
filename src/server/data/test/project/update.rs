use super::*;

/// Tests replacing the developer list and clearing the detail.
///
/// Expected: Ok(Some) with the new developers and no detail
#[tokio::test]
async fn replaces_developers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let project = factory::project::ProjectFactory::new(db, manager.id)
        .detail("Old detail")
        .build()
        .await?;
    let old = factory::create_user(db).await?;
    let new = factory::create_user(db).await?;
    factory::assign_project_developer(db, project.id, old.id).await?;

    let updated = ProjectRepository::new(db)
        .update(
            project.id,
            UpdateProjectParams {
                title: None,
                detail: Some(String::new()),
                developer_ids: Some(vec![new.id]),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, project.title);
    assert_eq!(updated.detail, None);
    assert_eq!(updated.developers, vec![Ref::Id(new.id)]);

    Ok(())
}

/// Tests that a new title also updates the lookup key.
///
/// Expected: the new title is taken and the old one is free
#[tokio::test]
async fn updates_title_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let project = factory::project::ProjectFactory::new(db, manager.id)
        .title("Old Title")
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    repo.update(
        project.id,
        UpdateProjectParams {
            title: Some("New Title".to_string()),
            ..Default::default()
        },
    )
    .await?;

    assert!(repo.title_taken("new title", None).await?);
    assert!(!repo.title_taken("old title", None).await?);

    Ok(())
}

/// Tests updating a missing project.
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

    let result = ProjectRepository::new(db)
        .update(3, UpdateProjectParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

use super::*;

/// Tests creating a project.
///
/// Expected: Ok with the manager referenced by id and no developers
#[tokio::test]
async fn creates_project_with_manager() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;

    let project = ProjectRepository::new(db)
        .create(CreateProjectParams {
            title: "Bug Tracker".to_string(),
            detail: Some("Tracks bugs".to_string()),
            manager_id: manager.id,
        })
        .await?;

    assert_eq!(project.title, "Bug Tracker");
    assert_eq!(project.detail.as_deref(), Some("Tracks bugs"));
    assert_eq!(project.manager, Some(Ref::Id(manager.id)));
    assert!(project.developers.is_empty());

    Ok(())
}

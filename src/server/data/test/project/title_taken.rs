use super::*;

/// Tests title uniqueness lookups.
///
/// Expected: Ok(true) for a used title in any case unless its project is
/// excluded
#[tokio::test]
async fn detects_taken_title_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let project = factory::project::ProjectFactory::new(db, manager.id)
        .title("Bug Tracker")
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    assert!(repo.title_taken("bug tracker", None).await?);
    assert!(!repo.title_taken("Issue Tracker", None).await?);
    assert!(!repo.title_taken("BUG TRACKER", Some(project.id)).await?);

    Ok(())
}

use super::*;

/// Tests the existence check.
///
/// Expected: Ok(true) for a stored project, Ok(false) otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = factory::helpers::create_project_with_manager(db).await?;

    let repo = ProjectRepository::new(db);
    assert!(repo.exists(project.id).await?);
    assert!(!repo.exists(project.id + 1).await?);

    Ok(())
}

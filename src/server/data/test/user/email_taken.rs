use super::*;

/// Tests email uniqueness lookups.
///
/// Expected: Ok(true) for a used email in any case, Ok(false) otherwise or
/// when the holder is excluded
#[tokio::test]
async fn detects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("jane@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.email_taken("Jane@Example.com", None).await?);
    assert!(!repo.email_taken("john@example.com", None).await?);
    assert!(!repo.email_taken("jane@example.com", Some(user.id)).await?);

    Ok(())
}

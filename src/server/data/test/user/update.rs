use super::*;

/// Tests applying a partial changeset.
///
/// Verifies that only given columns change and the username key follows the
/// new username.
///
/// Expected: Ok(Some) with the updated user
#[tokio::test]
async fn updates_given_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UserChangeset {
                username: Some("NewName".to_string()),
                role: Some(UserRole::Developer),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "NewName");
    assert_eq!(updated.role, UserRole::Developer);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.hash, user.hash);
    assert!(repo.username_taken("newname", None).await?);

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(42, UserChangeset::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

use super::*;

/// Tests creating a user.
///
/// Verifies that the username keeps its casing, the email is lowercased and
/// the role defaults to User.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn creates_user_with_default_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "JaneDoe".to_string(),
            email: "Jane@Example.com".to_string(),
            hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.username, "JaneDoe");
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.role, UserRole::User);
    assert!(user.avatar_url.is_none());

    let stored = repo.find_by_id(user.id).await?;
    assert_eq!(stored, Some(user));

    Ok(())
}

/// Tests that usernames differing only in case collide.
///
/// Expected: Err from the unique constraint on `username_key`
#[tokio::test]
async fn rejects_case_insensitive_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("janedoe")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            username: "JANEDOE".to_string(),
            email: "other@example.com".to_string(),
            hash: "hash".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

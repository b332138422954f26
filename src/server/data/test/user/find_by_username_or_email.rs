use super::*;

/// Tests login lookup by username in any case.
///
/// Expected: Ok(Some) for the matching user
#[tokio::test]
async fn finds_by_username_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("JaneDoe")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_username_or_email("janeDOE")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests login lookup by email in any case.
///
/// Expected: Ok(Some) for the matching user
#[tokio::test]
async fn finds_by_email_ignoring_case() -> Result<(), AppError> {
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

    let found = UserRepository::new(db)
        .find_by_username_or_email(" Jane@Example.COM ")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests lookup of an unknown login.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let found = UserRepository::new(db)
        .find_by_username_or_email("nobody")
        .await?;

    assert!(found.is_none());

    Ok(())
}

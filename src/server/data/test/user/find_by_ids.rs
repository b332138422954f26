use super::*;

/// Tests that missing ids are skipped.
///
/// Expected: Ok with only the existing users, ordered by id
#[tokio::test]
async fn returns_existing_users_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let users = UserRepository::new(db)
        .find_by_ids(&[second.id, 9999, first.id])
        .await?;

    let ids: Vec<i32> = users.iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests lookup with no ids.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let users = UserRepository::new(db).find_by_ids(&[]).await?;
    assert!(users.is_empty());

    Ok(())
}

use super::*;

/// Tests the own-account check.
///
/// Expected: Ok for the user's own id, AccessDenied for another or a
/// malformed id
#[tokio::test]
async fn allows_only_own_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let own_id = user.id.to_string();
    let other_id = other.id.to_string();

    assert!(AuthGuard::new(db, session)
        .is_own_account(&own_id)
        .require()
        .await
        .is_ok());
    assert!(matches!(
        AuthGuard::new(db, session)
            .is_own_account(&other_id)
            .require()
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(AuthGuard::new(db, session)
        .is_own_account("abc")
        .require()
        .await
        .is_err());

    Ok(())
}

/// Tests that Admins pass the own-account check for any account.
///
/// Expected: Ok
#[tokio::test]
async fn allows_admin_for_any_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_user_with_role(db, "Admin").await?;
    let other = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let other_id = other.id.to_string();
    let result = AuthGuard::new(db, session)
        .is_own_account(&other_id)
        .require()
        .await?;

    assert_eq!(result.id, admin.id);

    Ok(())
}

use super::*;

/// Tests that a guard without checks still needs a session user.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn denies_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session that references a deleted user.
///
/// Expected: Err(UserNotInDatabase) with the stale id
#[tokio::test]
async fn denies_when_session_user_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(77).await?;

    let result = AuthGuard::new(db, session).is_authenticated().require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(77)))
    ));

    Ok(())
}

/// Tests the authenticated check.
///
/// Expected: Ok with the session user
#[tokio::test]
async fn returns_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).is_authenticated().require().await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.username, user.username);

    Ok(())
}

/// Tests that checks stop at the first failure.
///
/// Verifies that a check chained after a failing one is not evaluated.
///
/// Expected: Err(AccessDenied) and the later predicate never called
#[tokio::test]
async fn stops_at_first_failed_check() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let evaluated = std::sync::atomic::AtomicBool::new(false);
    let result = AuthGuard::new(db, session)
        .is_authenticated()
        .is_role(UserRole::Admin)
        .custom("never reached", |_| {
            evaluated.store(true, std::sync::atomic::Ordering::SeqCst);
            true
        })
        .require()
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));
    assert!(!evaluated.load(std::sync::atomic::Ordering::SeqCst));

    Ok(())
}

use super::*;
use test_utils::factory::user::DEFAULT_PASSWORD;

/// Tests password re-verification.
///
/// Expected: Ok for the stored password, AccessDenied for a wrong, empty or
/// missing password
#[tokio::test]
async fn verifies_current_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    assert!(AuthGuard::new(db, session)
        .is_correct_password(Some(DEFAULT_PASSWORD))
        .require()
        .await
        .is_ok());

    for password in [Some("Wrong1234"), Some(""), None] {
        let result = AuthGuard::new(db, session)
            .is_correct_password(password)
            .require()
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    Ok(())
}

/// Tests a corrupt stored hash.
///
/// Expected: Err(AppError::InternalErr), not an authorization failure
#[tokio::test]
async fn fails_on_malformed_hash() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let mut active: entity::user::ActiveModel = user.clone().into();
    active.hash = ActiveValue::Set("corrupt".to_string());
    active.update(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .is_correct_password(Some(DEFAULT_PASSWORD))
        .require()
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

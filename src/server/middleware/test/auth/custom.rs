use super::*;

/// Tests the role edit rule.
///
/// Expected: a non-admin passes only without a requested role; an Admin
/// always passes
#[tokio::test]
async fn allows_role_edit_only_for_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let admin = factory::user::create_user_with_role(db, "Admin").await?;

    AuthSession::new(session).set_user_id(user.id).await?;
    assert!(AuthGuard::new(db, session)
        .custom("role edit", no_role_edit(None))
        .require()
        .await
        .is_ok());
    assert!(AuthGuard::new(db, session)
        .custom("role edit", no_role_edit(Some("Admin")))
        .require()
        .await
        .is_err());

    AuthSession::new(session).set_user_id(admin.id).await?;
    assert!(AuthGuard::new(db, session)
        .custom("role edit", no_role_edit(Some("User")))
        .require()
        .await
        .is_ok());

    Ok(())
}

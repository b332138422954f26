use super::*;

/// Tests that higher roles satisfy lower requirements.
///
/// Expected: Ok for Admin and Project Manager, AccessDenied for Developer
#[tokio::test]
async fn compares_roles_by_rank() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    for (role, allowed) in [
        ("Admin", true),
        ("Project Manager", true),
        ("Developer", false),
    ] {
        let user = factory::user::create_user_with_role(db, role).await?;
        AuthSession::new(session).set_user_id(user.id).await?;

        let result = AuthGuard::new(db, session)
            .is_authenticated()
            .is_role(UserRole::ProjectManager)
            .require()
            .await;

        assert_eq!(result.is_ok(), allowed, "role {}", role);
    }

    Ok(())
}

use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that pages are 1-based and ordered by id by default.
///
/// Expected: Ok with the requested slice of users
#[tokio::test]
async fn returns_requested_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::create_user(db).await?.id);
    }

    let repo = UserRepository::new(db);
    let first = repo
        .get_paginated(&ListParams {
            limit: 2,
            page: 1,
            sort: Vec::new(),
        })
        .await?;
    let third = repo
        .get_paginated(&ListParams {
            limit: 2,
            page: 3,
            sort: Vec::new(),
        })
        .await?;

    assert_eq!(first.iter().map(|u| u.id).collect::<Vec<_>>(), ids[..2]);
    assert_eq!(third.iter().map(|u| u.id).collect::<Vec<_>>(), ids[4..]);

    Ok(())
}

/// Tests sorting by username descending.
///
/// Expected: Ok with users in reverse alphabetical order regardless of case
#[tokio::test]
async fn sorts_by_username_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for username in ["bravo", "Charlie", "alpha"] {
        factory::user::UserFactory::new(db)
            .username(username)
            .build()
            .await?;
    }

    let users = UserRepository::new(db)
        .get_paginated(&ListParams {
            limit: 20,
            page: 1,
            sort: vec![SortKey {
                field: UserSortField::Username,
                direction: SortDirection::Desc,
            }],
        })
        .await?;

    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["Charlie", "bravo", "alpha"]);

    Ok(())
}

/// Tests a page past the end of the collection.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_past_last_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let users = UserRepository::new(db)
        .get_paginated(&ListParams {
            limit: 20,
            page: 2,
            sort: Vec::new(),
        })
        .await?;

    assert!(users.is_empty());

    Ok(())
}

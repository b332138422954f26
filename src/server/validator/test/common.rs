use crate::{
    model::api::ListQueryDto,
    server::{
        error::{client::ClientError, AppError},
        model::{
            query::SortDirection,
            user::UserSortField,
        },
        validator::{common, Validation},
    },
};
use test_utils::{builder::TestBuilder, factory};

fn query(limit: Option<&str>, page: Option<&str>, sort: Option<&str>) -> ListQueryDto {
    ListQueryDto {
        limit: limit.map(str::to_string),
        page: page.map(str::to_string),
        sort: sort.map(str::to_string),
    }
}

fn list_error(dto: ListQueryDto) -> Option<ClientError> {
    match common::list_params::<UserSortField>(dto) {
        Err(AppError::ClientErr(err)) => Some(err),
        _ => None,
    }
}

/// Tests the defaults of an empty list query.
///
/// Expected: limit 20, page 1, no sort keys
#[test]
fn list_params_defaults() -> Result<(), AppError> {
    let params = common::list_params::<UserSortField>(ListQueryDto::default())?;

    assert_eq!(params.limit, 20);
    assert_eq!(params.page, 1);
    assert!(params.sort.is_empty());

    Ok(())
}

/// Tests a complete list query.
///
/// Expected: parsed limit, page and sort keys in order
#[test]
fn list_params_parses_query() -> Result<(), AppError> {
    let params = common::list_params::<UserSortField>(query(
        Some(" 5 "),
        Some("3"),
        Some("-registerDate username"),
    ))?;

    assert_eq!(params.limit, 5);
    assert_eq!(params.page, 3);
    assert_eq!(params.sort.len(), 2);
    assert_eq!(params.sort[0].field, UserSortField::RegisterDate);
    assert_eq!(params.sort[0].direction, SortDirection::Desc);
    assert_eq!(params.sort[1].field, UserSortField::Username);
    assert_eq!(params.sort[1].direction, SortDirection::Asc);

    Ok(())
}

/// Tests rejected list queries.
///
/// Expected: the matching error for each bad parameter
#[test]
fn list_params_rejects_bad_values() {
    assert_eq!(list_error(query(Some("ten"), None, None)), Some(ClientError::LimitInvalid));
    assert_eq!(list_error(query(Some("0"), None, None)), Some(ClientError::LimitTooLow));
    assert_eq!(list_error(query(Some("101"), None, None)), Some(ClientError::LimitTooHigh));
    assert_eq!(list_error(query(None, Some("x"), None)), Some(ClientError::PageInvalid));
    assert_eq!(list_error(query(None, Some("0"), None)), Some(ClientError::PageTooLow));
    assert_eq!(list_error(query(None, None, Some("email"))), Some(ClientError::SortInvalid));
    assert_eq!(list_error(query(None, None, Some(""))), Some(ClientError::SortInvalid));
}

/// Tests pages whose row offset would not fit a signed 64-bit integer.
///
/// Expected: Page Too High past the last addressable page for the limit, the
/// last addressable page itself passes
#[test]
fn list_params_rejects_unaddressable_page() -> Result<(), AppError> {
    assert_eq!(
        list_error(query(Some("100"), Some("9223372036854775807"), None)),
        Some(ClientError::PageTooHigh)
    );
    assert_eq!(
        list_error(query(Some("100"), Some("92233720368547760"), None)),
        Some(ClientError::PageTooHigh)
    );
    assert_eq!(
        list_error(query(None, Some("461168601842738792"), None)),
        Some(ClientError::PageTooHigh)
    );

    let params = common::list_params::<UserSortField>(query(
        Some("100"),
        Some("92233720368547759"),
        None,
    ))?;
    assert_eq!(params.page, 92_233_720_368_547_759);

    Ok(())
}

/// Tests that limit is checked before page and sort.
///
/// Expected: the limit error
#[test]
fn list_params_reports_limit_first() {
    assert_eq!(
        list_error(query(Some("0"), Some("0"), Some("bogus"))),
        Some(ClientError::LimitTooLow)
    );
}

/// Tests path id validation.
///
/// Expected: positive integers pass, anything else fails with the given error
#[test]
fn resource_id_requires_positive_integer() {
    assert_eq!(common::resource_id("42", ClientError::UserIdInvalid).ok(), Some(42));

    for raw in ["0", "-1", "abc", ""] {
        assert!(matches!(
            common::resource_id(raw, ClientError::TicketIdInvalid),
            Err(AppError::ClientErr(ClientError::TicketIdInvalid))
        ));
    }
}

/// Tests a developer list of eligible users with duplicates.
///
/// Expected: Some with each id once
#[tokio::test]
async fn developers_accepts_eligible_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let developer = factory::user::create_user_with_role(db, "Developer").await?;
    let manager = factory::user::create_user_with_role(db, "Project Manager").await?;

    let mut validation = Validation::new();
    let ids = common::developers(
        &mut validation,
        db,
        Some(vec![
            developer.id.to_string(),
            manager.id.to_string(),
            developer.id.to_string(),
        ]),
    )
    .await;

    validation.finish()?;
    assert_eq!(ids, Some(vec![developer.id, manager.id]));

    Ok(())
}

/// Tests developer lists naming ineligible or unknown users.
///
/// Expected: Err(DeveloperInvalid)
#[tokio::test]
async fn developers_rejects_ineligible_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    for raw in [user.id.to_string(), "999".to_string(), "abc".to_string()] {
        let mut validation = Validation::new();
        let ids = common::developers(&mut validation, db, Some(vec![raw])).await;

        assert!(ids.is_none());
        assert!(matches!(
            validation.finish(),
            Err(AppError::ClientErr(ClientError::DeveloperInvalid))
        ));
    }

    Ok(())
}

/// Tests an absent developer list.
///
/// Expected: None without an error
#[tokio::test]
async fn developers_absent_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut validation = Validation::new();
    let ids = common::developers(&mut validation, db, None).await;

    assert!(ids.is_none());
    validation.finish()?;

    Ok(())
}

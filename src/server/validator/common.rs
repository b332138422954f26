//! Validators shared by every resource.

use sea_orm::DatabaseConnection;

use crate::{
    model::{api::ListQueryDto, user::UserRole},
    server::{
        data::user::UserRepository,
        error::{client::ClientError, AppError},
        model::query::{ListParams, SortField, SortKey, LIMIT_DEFAULT, LIMIT_MAX, LIMIT_MIN, PAGE_MIN},
        util::id::parse_id,
        validator::Validation,
    },
};

/// Maximum length of a ticket or project detail.
pub const DETAIL_MAX_LENGTH: usize = 1024;
pub const TITLE_MIN_LENGTH: usize = 3;
pub const TITLE_MAX_LENGTH: usize = 80;

/// Validates a resource id taken from the path.
///
/// # Returns
/// - `Ok(id)` - A positive integer id
/// - `Err(AppError::ClientErr(error))` - Anything else
pub fn resource_id(raw: &str, error: ClientError) -> Result<i32, AppError> {
    parse_id(raw).ok_or_else(|| error.into())
}

/// Validates the paging and sorting query of a collection endpoint.
///
/// Checks `limit`, then `page`, then `sort`; absent parameters take their
/// defaults.
pub fn list_params<K: SortField>(query: ListQueryDto) -> Result<ListParams<K>, AppError> {
    let mut validation = Validation::new();

    let limit = validation
        .field(query.limit)
        .optional()
        .trim()
        .integer(ClientError::LimitInvalid)
        .int_min(LIMIT_MIN, ClientError::LimitTooLow)
        .int_max(LIMIT_MAX, ClientError::LimitTooHigh)
        .int_value();

    let page = validation
        .field(query.page)
        .optional()
        .trim()
        .integer(ClientError::PageInvalid)
        .int_min(PAGE_MIN, ClientError::PageTooLow)
        .int_max(
            page_max(limit.unwrap_or(LIMIT_DEFAULT as i64)),
            ClientError::PageTooHigh,
        )
        .int_value();

    let sort = validation
        .field(query.sort)
        .optional()
        .trim()
        .check(
            |sort| !sort.is_empty() && SortKey::<K>::parse_list(sort).is_some(),
            ClientError::SortInvalid,
        )
        .value();

    validation.finish()?;

    Ok(ListParams {
        limit: limit.map_or(LIMIT_DEFAULT, |limit| limit as u64),
        page: page.map_or(1, |page| page as u64),
        sort: sort
            .and_then(|sort| SortKey::parse_list(&sort))
            .unwrap_or_default(),
    })
}

/// Last page whose row offset, `(page - 1) * limit`, still fits the signed
/// 64-bit offset the database binds.
fn page_max(limit: i64) -> i64 {
    i64::MAX / limit.max(LIMIT_MIN) + 1
}

/// Validates a developer list.
///
/// Every entry must be the id of an existing user whose role is at least
/// Developer. Duplicates are dropped. Returns `None` when the list was not
/// sent or an error was recorded.
pub async fn developers(
    validation: &mut Validation,
    db: &DatabaseConnection,
    raw: Option<Vec<String>>,
) -> Option<Vec<i32>> {
    let raw = raw?;
    if validation.has_error() {
        return None;
    }

    let mut ids = Vec::with_capacity(raw.len());
    for value in &raw {
        let Some(id) = parse_id(value) else {
            validation.record(ClientError::DeveloperInvalid);
            return None;
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    match UserRepository::new(db).find_by_ids(&ids).await {
        Ok(users) => {
            let eligible = users.len() == ids.len()
                && users.iter().all(|user| user.role >= UserRole::Developer);

            if !eligible {
                validation.record(ClientError::DeveloperInvalid);
                return None;
            }
        }
        Err(err) => {
            validation.record(err);
            return None;
        }
    }

    Some(ids)
}

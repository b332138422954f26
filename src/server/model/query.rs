//! Parameters shared by the collection endpoints.

use sea_orm::Order;

/// Default number of items per page.
pub const LIMIT_DEFAULT: u64 = 20;
/// Smallest accepted page size.
pub const LIMIT_MIN: i64 = 1;
/// Largest accepted page size.
pub const LIMIT_MAX: i64 = 100;
/// First page number; pages are 1-based on the wire.
pub const PAGE_MIN: i64 = 1;

/// A field of a resource's JSON projection that collections can be sorted by.
pub trait SortField: Sized + Copy {
    /// Maps a JSON key to the field, `None` when the key cannot be sorted on.
    fn from_key(key: &str) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<K> {
    pub field: K,
    pub direction: SortDirection,
}

impl<K: SortField> SortKey<K> {
    /// Parses a sort expression such as `"-createDate title"`.
    ///
    /// Keys are separated by whitespace; a leading `-` sorts descending.
    /// Returns `None` if any key is not sortable.
    pub fn parse_list(raw: &str) -> Option<Vec<Self>> {
        raw.split_whitespace()
            .map(|token| {
                let (direction, key) = match token.strip_prefix('-') {
                    Some(key) => (SortDirection::Desc, key),
                    None => (SortDirection::Asc, token),
                };

                K::from_key(key).map(|field| SortKey { field, direction })
            })
            .collect()
    }
}

/// Page, page size, and ordering of a collection query.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams<K> {
    /// Items per page.
    pub limit: u64,
    /// 1-based page number.
    pub page: u64,
    /// Sort keys in priority order; empty means ascending id.
    pub sort: Vec<SortKey<K>>,
}

impl<K> Default for ListParams<K> {
    fn default() -> Self {
        Self {
            limit: LIMIT_DEFAULT,
            page: 1,
            sort: Vec::new(),
        }
    }
}

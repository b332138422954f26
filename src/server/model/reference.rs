//! References between resources.

use crate::model::reference::RefDto;

/// A reference to another resource that may or may not have been loaded.
///
/// Repositories return references as bare ids. Services replace them with the
/// loaded resource when a response should embed it.
#[derive(Debug, Clone, PartialEq)]
pub enum Ref<T> {
    Id(i32),
    Populated(T),
}

impl<T> Ref<T> {
    /// Converts the reference for a response body, rendering a populated
    /// resource with `f`.
    pub fn into_dto<D>(self, f: impl FnOnce(T) -> D) -> RefDto<D> {
        match self {
            Self::Id(id) => RefDto::Id(id),
            Self::Populated(inner) => RefDto::Populated(Box::new(f(inner))),
        }
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Populated(inner) => Some(inner),
        }
    }
}

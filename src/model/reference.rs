use serde::{Deserialize, Serialize};

/// A reference to another resource in a response body.
///
/// Serialized as the bare id when the referenced resource was not loaded, or as
/// the nested resource JSON when it was.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RefDto<T> {
    Id(i32),
    Populated(Box<T>),
}

impl<T> RefDto<T> {
    /// Returns the nested resource, if the reference was populated.
    pub fn populated(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Populated(inner) => Some(inner),
        }
    }
}

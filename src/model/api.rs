use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error body returned for every failed request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ErrorDto {
    /// Path of the HTML page describing this kind of error.
    #[serde(rename = "type")]
    pub kind: String,
    pub status: u16,
    pub title: String,
    pub detail: String,
    /// Description of the underlying failure; only present outside production.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Envelope wrapping every successful response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SuccessDto<T> {
    pub status: u16,
    pub title: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> SuccessDto<T> {
    /// Builds a 200 envelope carrying `data`.
    pub fn ok(title: impl Into<String>, detail: impl Into<String>, data: T) -> Self {
        Self {
            status: 200,
            title: title.into(),
            detail: detail.into(),
            data: Some(data),
        }
    }

    /// Builds a 200 envelope without data.
    pub fn message(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: 200,
            title: title.into(),
            detail: detail.into(),
            data: None,
        }
    }
}

/// Query string of the collection endpoints.
#[derive(Deserialize, Default, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQueryDto {
    /// Items per page, 1 to 100. Defaults to 20.
    pub limit: Option<String>,
    /// 1-based page number. Defaults to 1.
    pub page: Option<String>,
    /// Space separated JSON keys; prefix a key with `-` to sort descending.
    pub sort: Option<String>,
}

/// Query string of the ticket collection endpoint.
#[derive(Deserialize, Default, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TicketListQueryDto {
    /// Items per page, 1 to 100. Defaults to 20.
    pub limit: Option<String>,
    /// 1-based page number. Defaults to 1.
    pub page: Option<String>,
    /// Space separated JSON keys; prefix a key with `-` to sort descending.
    pub sort: Option<String>,
    /// Only return tickets of this project.
    pub project: Option<String>,
}

impl TicketListQueryDto {
    /// Splits off the project filter from the paging parameters.
    pub fn into_parts(self) -> (ListQueryDto, Option<String>) {
        (
            ListQueryDto {
                limit: self.limit,
                page: self.page,
                sort: self.sort,
            },
            self.project,
        )
    }
}

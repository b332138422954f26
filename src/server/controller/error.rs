use axum::{extract::Path, response::Html};

use crate::{
    model::api::ErrorDto,
    server::error::{client::ClientError, AppError},
};

pub static ERROR_TAG: &str = "error";

/// Describes a catalogued error as a small HTML page.
///
/// The name is matched against error titles ignoring case, dashes and a
/// trailing `.html`, so the `type` path of any error body resolves here.
///
/// # Returns
/// - `200 OK` - HTML page with title, status and detail
/// - `404 Not Found` - No error with that name
#[utoipa::path(
    get,
    path = "/errors/{error_name}",
    tag = ERROR_TAG,
    params(
        ("error_name" = String, Path, description = "Error name, e.g. `path-not-found.html`")
    ),
    responses(
        (status = 200, description = "Error description", body = String, content_type = "text/html"),
        (status = 404, description = "Unknown error name", body = ErrorDto)
    ),
)]
pub async fn get_error(Path(error_name): Path<String>) -> Result<Html<String>, AppError> {
    let err = ClientError::from_name(&error_name).ok_or(ClientError::PathNotFound)?;

    Ok(Html(format!(
        "<h1>{}</h1>\n<h2>{}</h2>\n<p>{}</p>",
        err.title(),
        err.status().as_u16(),
        err.detail()
    )))
}

/// Fallback for every unrouted path and method.
pub async fn not_found() -> AppError {
    ClientError::PathNotFound.into()
}

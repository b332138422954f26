//! Final formatting of error responses.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::server::{
    config::Environment,
    error::{client::ClientError, ErrorTrace},
    state::AppState,
};

/// Adds the description of internal failures to 500 responses outside
/// production.
///
/// Internal errors attach an `ErrorTrace` extension when rendered. In
/// production the generic body is sent unchanged; otherwise the body is
/// rebuilt with `stack` carrying the trace.
pub async fn format_errors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let Some(ErrorTrace(trace)) = response.extensions_mut().remove::<ErrorTrace>() else {
        return response;
    };

    if state.environment == Environment::Production {
        return response;
    }

    let mut body = ClientError::InternalServerError.to_dto();
    body.stack = Some(trace);

    (ClientError::InternalServerError.status(), Json(body)).into_response()
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        user::{LoginDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{payload::Payload, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping session endpoints in OpenAPI documentation
pub static SESSION_TAG: &str = "session";

/// Log in with a username or email and password.
///
/// A new session id is issued on success.
///
/// # Returns
/// - `200 OK` - Logged in, with the user's private data
/// - `401 Unauthorized` - Unknown login or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/session",
    tag = SESSION_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = SuccessDto<UserDto>),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Payload(payload): Payload<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(payload.username.as_deref(), payload.password.as_deref())
        .await?;

    AuthSession::new(&session).login(user.id).await?;

    tracing::debug!("User {} logged in", user.id);

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "Logged In",
            format!(
                "User {} with id {} was successfully logged in.",
                user.username, user.id
            ),
            user.into_dto(true),
        )),
    ))
}

/// Log out, discarding the session. Succeeds without a session too.
#[utoipa::path(
    delete,
    path = "/session",
    tag = SESSION_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).logout().await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::<()>::message(
            "Logged Out",
            "User was successfully logged out.",
        )),
    ))
}

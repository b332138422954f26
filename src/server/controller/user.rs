use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ListQueryDto, SuccessDto},
        user::{CreateUserDto, DeleteUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::{client::ClientError, AppError},
        middleware::{
            auth::{no_role_edit, AuthGuard},
            payload::Payload,
            session::AuthSession,
        },
        model::user::UserSortField,
        service::user::UserService,
        state::AppState,
        validator::{self, common::resource_id},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account.
///
/// The new user is logged in right away and receives the default role.
///
/// # Returns
/// - `200 OK` - Created and logged in, with the user's private data
/// - `400 Bad Request` - First failed field check
/// - `500 Internal Server Error` - Database, hashing or session error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created and logged in", body = SuccessDto<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Payload(payload): Payload<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validator::user::create(&state.db, payload).await?;

    let user = UserService::new(&state.db).create(params).await?;

    AuthSession::new(&session).login(user.id).await?;

    tracing::info!("Registered user {} ({})", user.username, user.id);

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "User Created",
            format!(
                "User {} with id {} was successfully created and logged in.",
                user.username, user.id
            ),
            user.into_dto(true),
        )),
    ))
}

/// Get one page of users.
///
/// # Returns
/// - `200 OK` - Public data of the users on the page
/// - `400 Bad Request` - Invalid limit, page or sort
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(ListQueryDto),
    responses(
        (status = 200, description = "Page of users", body = SuccessDto<Vec<UserDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validator::common::list_params::<UserSortField>(query)?;

    let users = UserService::new(&state.db).get_all(&params).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "Users Retrieved",
            format!(
                "Page {} of users collection was successfully retrieved.",
                params.page
            ),
            users
                .into_iter()
                .map(|user| user.into_dto(false))
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Get a user by id.
///
/// The email is only included when the requester is that user.
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user", body = SuccessDto<UserDto>),
        (status = 400, description = "Malformed user id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = resource_id(&user_id, ClientError::UserIdInvalid)?;

    let user = UserService::new(&state.db)
        .get_by_id(user_id)
        .await?
        .ok_or(ClientError::UserNotFound)?;

    let is_owner = AuthSession::new(&session).get_user_id().await? == Some(user.id);

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "User Retrieved",
            format!(
                "User {} with id {} was successfully retrieved.",
                user.username, user.id
            ),
            user.into_dto(is_owner),
        )),
    ))
}

/// Edit an account.
///
/// # Access Control
/// - Own account, confirmed with the current `password`, or any account as
///   Admin (still confirmed with the Admin's own password)
/// - Only Admins may change a role
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Malformed id or first failed field check
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not allowed to edit this account
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database, hashing or session error
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = SuccessDto<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Payload(payload): Payload<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .is_authenticated()
        .is_own_account(&user_id)
        .is_correct_password(payload.password.as_deref())
        .custom("role edit", no_role_edit(payload.role.as_deref()))
        .require()
        .await?;

    let user_id = resource_id(&user_id, ClientError::UserIdInvalid)?;
    let params = validator::user::edit(&state.db, user_id, payload).await?;

    let user = UserService::new(&state.db)
        .update(user_id, params)
        .await?
        .ok_or(ClientError::UserNotFound)?;

    let is_owner = user.id == actor.id;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "User Updated",
            format!(
                "User {} with id {} was successfully updated.",
                user.username, user.id
            ),
            user.into_dto(is_owner),
        )),
    ))
}

/// Delete an account.
///
/// Deleting the logged in account also ends the session.
///
/// # Access Control
/// - Own account, or any account as Admin, confirmed with the requester's
///   current `password`
///
/// # Returns
/// - `200 OK` - User deleted
/// - `400 Bad Request` - Malformed id
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not allowed to delete this account
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    request_body = DeleteUserDto,
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Malformed user id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
    Payload(payload): Payload<DeleteUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .is_authenticated()
        .is_own_account(&user_id)
        .is_correct_password(payload.password.as_deref())
        .require()
        .await?;

    let user_id = resource_id(&user_id, ClientError::UserIdInvalid)?;

    if !UserService::new(&state.db).delete(user_id).await? {
        return Err(ClientError::UserNotFound.into());
    }

    if user_id == actor.id {
        AuthSession::new(&session).logout().await?;
    }

    tracing::info!("User {} deleted account {}", actor.id, user_id);

    Ok((
        StatusCode::OK,
        Json(SuccessDto::<UserDto>::message(
            "User Deleted",
            "User was successfully deleted.",
        )),
    ))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto, TicketListQueryDto},
        ticket::{CreateTicketDto, TicketDto, UpdateTicketDto},
    },
    server::{
        error::{client::ClientError, AppError},
        middleware::{auth::AuthGuard, payload::Payload},
        model::ticket::{Ticket, TicketSortField},
        service::{project::ProjectService, ticket::TicketService},
        state::AppState,
        validator::{self, common::resource_id},
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

/// Users involved with a ticket, as far as permissions are concerned.
struct TicketRoles {
    submitter_id: Option<i32>,
    manager_id: Option<i32>,
    developer_ids: Vec<i32>,
}

/// Looks up the ticket named by a raw path id, along with the manager of its
/// project.
///
/// # Returns
/// - `Ok((Ticket, TicketRoles))` - Ticket references left as ids
/// - `Err(TicketIdInvalid)` - Malformed id
/// - `Err(TicketNotFound)` - No ticket with that id
async fn find_ticket(state: &AppState, ticket_id: &str) -> Result<(Ticket, TicketRoles), AppError> {
    let ticket_id = resource_id(ticket_id, ClientError::TicketIdInvalid)?;

    let ticket = TicketService::new(&state.db)
        .get_by_id(ticket_id)
        .await?
        .ok_or(ClientError::TicketNotFound)?;

    let manager_id = ProjectService::new(&state.db)
        .get_by_id(ticket.project_id())
        .await?
        .and_then(|project| project.manager_id());

    let roles = TicketRoles {
        submitter_id: ticket.submitter_id(),
        manager_id,
        developer_ids: ticket.developer_ids(),
    };

    Ok((ticket, roles))
}

/// File a ticket against a project.
///
/// # Access Control
/// - Any logged in user; the requester becomes the submitter
///
/// # Returns
/// - `200 OK` - The created ticket
/// - `400 Bad Request` - First failed field check
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - The referenced project does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/tickets",
    tag = TICKET_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 200, description = "Ticket created", body = SuccessDto<TicketDto>),
        (status = 400, description = "Invalid ticket data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    session: Session,
    Payload(payload): Payload<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .is_authenticated()
        .require()
        .await?;

    let params = validator::ticket::create(&state.db, actor.id, payload).await?;

    let ticket = TicketService::new(&state.db).create(params).await?;

    tracing::info!(
        "User {} filed ticket {} on project {}",
        actor.id,
        ticket.id,
        ticket.project_id()
    );

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "Ticket Created",
            format!(
                "Ticket {} with id {} was successfully created.",
                ticket.title, ticket.id
            ),
            ticket.into_dto(),
        )),
    ))
}

/// Get one page of tickets, optionally of a single project.
#[utoipa::path(
    get,
    path = "/tickets",
    tag = TICKET_TAG,
    params(TicketListQueryDto),
    responses(
        (status = 200, description = "Page of tickets", body = SuccessDto<Vec<TicketDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    Query(query): Query<TicketListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let (query, project) = query.into_parts();

    let params = validator::common::list_params::<TicketSortField>(query)?;
    let project_id = project
        .map(|project| resource_id(project.trim(), ClientError::ProjectIdInvalid))
        .transpose()?;

    let tickets = TicketService::new(&state.db)
        .get_all(&params, project_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "Tickets Retrieved",
            format!(
                "Page {} of tickets collection was successfully retrieved.",
                params.page
            ),
            tickets
                .into_iter()
                .map(Ticket::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Get a ticket with its project, submitter and developers embedded.
#[utoipa::path(
    get,
    path = "/tickets/{ticket_id}",
    tag = TICKET_TAG,
    params(
        ("ticket_id" = String, Path, description = "Ticket id")
    ),
    responses(
        (status = 200, description = "The ticket", body = SuccessDto<TicketDto>),
        (status = 400, description = "Malformed ticket id", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let ticket_id = resource_id(&ticket_id, ClientError::TicketIdInvalid)?;

    let ticket = TicketService::new(&state.db)
        .get_populated(ticket_id)
        .await?
        .ok_or(ClientError::TicketNotFound)?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "Ticket Retrieved",
            format!(
                "Ticket {} with id {} was successfully retrieved.",
                ticket.title, ticket.id
            ),
            ticket.into_dto(),
        )),
    ))
}

/// Edit a ticket.
///
/// # Access Control
/// - The submitter, the project's manager, an assigned developer or an
///   `Admin`
/// - Only the project's manager or an `Admin` may change the developers
///
/// # Returns
/// - `200 OK` - The updated ticket
/// - `400 Bad Request` - Malformed id or first failed field check
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not involved with the ticket
/// - `404 Not Found` - No ticket with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/tickets/{ticket_id}",
    tag = TICKET_TAG,
    params(
        ("ticket_id" = String, Path, description = "Ticket id")
    ),
    request_body = UpdateTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = SuccessDto<TicketDto>),
        (status = 400, description = "Invalid ticket data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(ticket_id): Path<String>,
    Payload(payload): Payload<UpdateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let (ticket, roles) = find_ticket(&state, &ticket_id).await?;
    let assigns_developers = payload.developers.is_some();

    AuthGuard::new(&state.db, &session)
        .is_authenticated()
        .custom("ticket member", |user| {
            user.is_admin()
                || roles.submitter_id == Some(user.id)
                || roles.manager_id == Some(user.id)
                || roles.developer_ids.contains(&user.id)
        })
        .custom("developer assignment", |user| {
            !assigns_developers || user.is_admin() || roles.manager_id == Some(user.id)
        })
        .require()
        .await?;

    let params = validator::ticket::edit(&state.db, payload).await?;

    let ticket = TicketService::new(&state.db)
        .update(ticket.id, params)
        .await?
        .ok_or(ClientError::TicketNotFound)?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "Ticket Updated",
            format!(
                "Ticket {} with id {} was successfully updated.",
                ticket.title, ticket.id
            ),
            ticket.into_dto(),
        )),
    ))
}

/// Delete a ticket.
///
/// # Access Control
/// - The submitter, the project's manager or an `Admin`
#[utoipa::path(
    delete,
    path = "/tickets/{ticket_id}",
    tag = TICKET_TAG,
    params(
        ("ticket_id" = String, Path, description = "Ticket id")
    ),
    responses(
        (status = 200, description = "Ticket deleted"),
        (status = 400, description = "Malformed ticket id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (ticket, roles) = find_ticket(&state, &ticket_id).await?;

    let actor = AuthGuard::new(&state.db, &session)
        .is_authenticated()
        .custom("ticket owner", |user| {
            user.is_admin()
                || roles.submitter_id == Some(user.id)
                || roles.manager_id == Some(user.id)
        })
        .require()
        .await?;

    if !TicketService::new(&state.db).delete(ticket.id).await? {
        return Err(ClientError::TicketNotFound.into());
    }

    tracing::info!("User {} deleted ticket {}", actor.id, ticket.id);

    Ok((
        StatusCode::OK,
        Json(SuccessDto::<TicketDto>::message(
            "Ticket Deleted",
            format!(
                "Ticket {} with id {} was successfully deleted.",
                ticket.title, ticket.id
            ),
        )),
    ))
}

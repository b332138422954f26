use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::{service::SignedCookie, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
        ticket::{
            CreateTicketDto, TicketDto, TicketPriority, TicketStatus, TicketType, UpdateTicketDto,
        },
        user::{CreateUserDto, DeleteUserDto, LoginDto, UpdateUserDto, UserDto, UserRole},
    },
    server::{
        controller::{
            error::{self, get_error, not_found},
            project, session, ticket, user,
        },
        middleware::error::format_errors,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bugtracker API",
        description = "Users, projects and tickets behind session authentication."
    ),
    paths(
        session::login,
        session::logout,
        user::create_user,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        project::create_project,
        project::get_projects,
        project::get_project,
        project::update_project,
        project::delete_project,
        ticket::create_ticket,
        ticket::get_tickets,
        ticket::get_ticket,
        ticket::update_ticket,
        ticket::delete_ticket,
        error::get_error,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        UserRole,
        LoginDto,
        CreateUserDto,
        UpdateUserDto,
        DeleteUserDto,
        ProjectDto,
        CreateProjectDto,
        UpdateProjectDto,
        TicketDto,
        TicketType,
        TicketStatus,
        TicketPriority,
        CreateTicketDto,
        UpdateTicketDto,
    )),
    tags(
        (name = "session", description = "Logging in and out"),
        (name = "user", description = "User accounts"),
        (name = "project", description = "Projects and their developers"),
        (name = "ticket", description = "Tickets filed against projects"),
        (name = "error", description = "Error documentation pages")
    )
)]
pub struct ApiDoc;

/// Routes of the API, without state or session handling.
///
/// Unknown paths and methods answer with `PathNotFound`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", post(session::login).delete(session::logout))
        .route("/users", post(user::create_user).get(user::get_users))
        .route(
            "/users/{user_id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/projects",
            post(project::create_project).get(project::get_projects),
        )
        .route(
            "/projects/{project_id}",
            get(project::get_project)
                .put(project::update_project)
                .delete(project::delete_project),
        )
        .route(
            "/tickets",
            post(ticket::create_ticket).get(ticket::get_tickets),
        )
        .route(
            "/tickets/{ticket_id}",
            get(ticket::get_ticket)
                .put(ticket::update_ticket)
                .delete(ticket::delete_ticket),
        )
        .route("/errors/{error_name}", get(get_error))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}

/// Builds the complete application.
///
/// Layers, innermost first: error formatting, sessions, request tracing.
pub fn app(state: AppState, session_layer: SessionManagerLayer<SqliteStore, SignedCookie>) -> Router {
    router()
        .layer(middleware::from_fn_with_state(state.clone(), format_errors))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

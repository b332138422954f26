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
        project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
        user::UserRole,
    },
    server::{
        error::{client::ClientError, AppError},
        middleware::{auth::AuthGuard, payload::Payload},
        model::{
            project::{Project, ProjectSortField},
            user::User,
        },
        service::project::ProjectService,
        state::AppState,
        validator::{self, common::resource_id},
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

/// Passes for the project's manager and for Admins.
fn is_manager(project: &Project) -> impl Fn(&User) -> bool + Send + Sync + 'static {
    let manager_id = project.manager_id();
    move |user| manager_id == Some(user.id) || user.is_admin()
}

/// Looks up the project named by a raw path id.
///
/// # Returns
/// - `Ok(Project)` - References left as ids
/// - `Err(ProjectIdInvalid)` - Malformed id
/// - `Err(ProjectNotFound)` - No project with that id
async fn find_project(state: &AppState, project_id: &str) -> Result<Project, AppError> {
    let project_id = resource_id(project_id, ClientError::ProjectIdInvalid)?;

    ProjectService::new(&state.db)
        .get_by_id(project_id)
        .await?
        .ok_or_else(|| ClientError::ProjectNotFound.into())
}

/// Create a project managed by the requester.
///
/// # Access Control
/// - `Project Manager` or `Admin`
///
/// # Returns
/// - `200 OK` - The created project
/// - `400 Bad Request` - First failed field check
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Role below Project Manager
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 200, description = "Project created", body = SuccessDto<ProjectDto>),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Payload(payload): Payload<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .is_authenticated()
        .is_role(UserRole::ProjectManager)
        .require()
        .await?;

    let params = validator::project::create(&state.db, actor.id, payload).await?;

    let project = ProjectService::new(&state.db).create(params).await?;

    tracing::info!("User {} created project {}", actor.id, project.id);

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "Project Created",
            format!(
                "Project {} with id {} was successfully created.",
                project.title, project.id
            ),
            project.into_dto(),
        )),
    ))
}

/// Get one page of projects.
#[utoipa::path(
    get,
    path = "/projects",
    tag = PROJECT_TAG,
    params(ListQueryDto),
    responses(
        (status = 200, description = "Page of projects", body = SuccessDto<Vec<ProjectDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validator::common::list_params::<ProjectSortField>(query)?;

    let projects = ProjectService::new(&state.db).get_all(&params).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "Projects Retrieved",
            format!(
                "Page {} of projects collection was successfully retrieved.",
                params.page
            ),
            projects
                .into_iter()
                .map(Project::into_dto)
                .collect::<Vec<_>>(),
        )),
    ))
}

/// Get a project with its manager and developers embedded.
///
/// # Returns
/// - `200 OK` - The project
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No project with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = String, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "The project", body = SuccessDto<ProjectDto>),
        (status = 400, description = "Malformed project id", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = resource_id(&project_id, ClientError::ProjectIdInvalid)?;

    let project = ProjectService::new(&state.db)
        .get_populated(project_id)
        .await?
        .ok_or(ClientError::ProjectNotFound)?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "Project Retrieved",
            format!(
                "Project {} with id {} was successfully retrieved.",
                project.title, project.id
            ),
            project.into_dto(),
        )),
    ))
}

/// Edit a project.
///
/// A `developers` list replaces the current developers.
///
/// # Access Control
/// - The project's manager or an `Admin`
///
/// # Returns
/// - `200 OK` - The updated project
/// - `400 Bad Request` - Malformed id or first failed field check
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not the manager
/// - `404 Not Found` - No project with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = String, Path, description = "Project id")
    ),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated", body = SuccessDto<ProjectDto>),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<String>,
    Payload(payload): Payload<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let project = find_project(&state, &project_id).await?;

    AuthGuard::new(&state.db, &session)
        .is_authenticated()
        .custom("project manager", is_manager(&project))
        .require()
        .await?;

    let params = validator::project::edit(&state.db, project.id, payload).await?;

    let project = ProjectService::new(&state.db)
        .update(project.id, params)
        .await?
        .ok_or(ClientError::ProjectNotFound)?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::ok(
            "Project Updated",
            format!(
                "Project {} with id {} was successfully updated.",
                project.title, project.id
            ),
            project.into_dto(),
        )),
    ))
}

/// Delete a project together with its tickets.
///
/// # Access Control
/// - The project's manager or an `Admin`
#[utoipa::path(
    delete,
    path = "/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = String, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Project deleted"),
        (status = 400, description = "Malformed project id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project = find_project(&state, &project_id).await?;

    let actor = AuthGuard::new(&state.db, &session)
        .is_authenticated()
        .custom("project manager", is_manager(&project))
        .require()
        .await?;

    if !ProjectService::new(&state.db).delete(project.id).await? {
        return Err(ClientError::ProjectNotFound.into());
    }

    tracing::info!("User {} deleted project {}", actor.id, project.id);

    Ok((
        StatusCode::OK,
        Json(SuccessDto::<ProjectDto>::message(
            "Project Deleted",
            format!(
                "Project {} with id {} was successfully deleted.",
                project.title, project.id
            ),
        )),
    ))
}

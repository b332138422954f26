//! Validation of project forms.

use std::sync::LazyLock;

use regex::Regex;
use sea_orm::DatabaseConnection;

use crate::{
    model::project::{CreateProjectDto, UpdateProjectDto},
    server::{
        data::project::ProjectRepository,
        error::{client::ClientError, AppError},
        model::project::{CreateProjectParams, UpdateProjectParams},
        validator::{
            common::{self, DETAIL_MAX_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH},
            Validation,
        },
    },
};

/// Starts with a letter, ends with a letter or digit, and in between allows
/// letters, digits, spaces and `_.,:'&()!?-`.
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z](?:[A-Za-z0-9 _.,:'&()!?-]*[A-Za-z0-9])?$")
        .expect("valid project title regex")
});

/// Validates a new project managed by `manager_id`.
pub async fn create(
    db: &DatabaseConnection,
    manager_id: i32,
    dto: CreateProjectDto,
) -> Result<CreateProjectParams, AppError> {
    let mut validation = Validation::new();

    let title = title(&mut validation, db, dto.title, None).await;
    let detail = detail(&mut validation, dto.detail);

    validation.finish()?;

    Ok(CreateProjectParams {
        title: title.unwrap_or_default(),
        detail: detail.filter(|detail| !detail.is_empty()),
        manager_id,
    })
}

/// Validates an edit of project `project_id`; every field is optional.
pub async fn edit(
    db: &DatabaseConnection,
    project_id: i32,
    dto: UpdateProjectDto,
) -> Result<UpdateProjectParams, AppError> {
    let mut validation = Validation::new();

    let title = title(&mut validation, db, dto.title, Some(project_id)).await;
    let detail = detail(&mut validation, dto.detail);
    let developer_ids = common::developers(&mut validation, db, dto.developers).await;

    validation.finish()?;

    Ok(UpdateProjectParams {
        title,
        detail,
        developer_ids,
    })
}

async fn title(
    validation: &mut Validation,
    db: &DatabaseConnection,
    value: Option<String>,
    editing: Option<i32>,
) -> Option<String> {
    let mut chain = validation.field(value);
    if editing.is_some() {
        chain = chain.optional();
    }

    chain
        .trim()
        .required(ClientError::TitleRequired)
        .min_length(TITLE_MIN_LENGTH, ClientError::TitleTooShort)
        .max_length(TITLE_MAX_LENGTH, ClientError::TitleTooLong)
        .matches(&TITLE_PATTERN, ClientError::TitleInvalid)
        .unique(
            |title| async move {
                ProjectRepository::new(db)
                    .title_taken(&title, editing)
                    .await
                    .map_err(AppError::from)
            },
            ClientError::TitleAlreadyInUse,
        )
        .await
        .value()
}

fn detail(validation: &mut Validation, value: Option<String>) -> Option<String> {
    validation
        .field(value)
        .optional()
        .trim()
        .max_length(DETAIL_MAX_LENGTH, ClientError::DetailTooLong)
        .value()
}

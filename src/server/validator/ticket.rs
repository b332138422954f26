//! Validation of ticket forms.

use sea_orm::DatabaseConnection;

use crate::{
    model::ticket::{CreateTicketDto, TicketPriority, TicketStatus, TicketType, UpdateTicketDto},
    server::{
        data::project::ProjectRepository,
        error::{client::ClientError, AppError},
        model::ticket::{CreateTicketParams, UpdateTicketParams},
        util::id::parse_id,
        validator::{
            common::{self, DETAIL_MAX_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH},
            FieldChain, Validation,
        },
    },
};

/// Validates a new ticket filed by `submitter_id`.
///
/// The referenced project must exist; a well-formed id of a missing project
/// fails with `ProjectNotFound`.
pub async fn create(
    db: &DatabaseConnection,
    submitter_id: i32,
    dto: CreateTicketDto,
) -> Result<CreateTicketParams, AppError> {
    let mut validation = Validation::new();

    let kind = kind(validation.field(dto.kind));
    let priority = priority(validation.field(dto.priority));
    let title = title(validation.field(dto.title));
    let detail = detail(validation.field(dto.detail));

    let project_id = validation
        .field(dto.project)
        .trim()
        .check(|id| parse_id(id).is_some(), ClientError::ProjectIdInvalid)
        .verify(
            |id| async move {
                match parse_id(&id) {
                    Some(id) => ProjectRepository::new(db)
                        .exists(id)
                        .await
                        .map_err(AppError::from),
                    None => Ok(false),
                }
            },
            ClientError::ProjectNotFound,
        )
        .await
        .value()
        .as_deref()
        .and_then(parse_id);

    validation.finish()?;

    Ok(CreateTicketParams {
        kind: kind
            .as_deref()
            .and_then(TicketType::parse)
            .ok_or(ClientError::TicketTypeInvalid)?,
        priority: priority
            .as_deref()
            .and_then(TicketPriority::parse)
            .ok_or(ClientError::TicketPriorityInvalid)?,
        title: title.unwrap_or_default(),
        detail: detail.unwrap_or_default(),
        project_id: project_id.ok_or(ClientError::ProjectIdInvalid)?,
        submitter_id,
    })
}

/// Validates a ticket edit; every field is optional.
pub async fn edit(
    db: &DatabaseConnection,
    dto: UpdateTicketDto,
) -> Result<UpdateTicketParams, AppError> {
    let mut validation = Validation::new();

    let kind = kind(validation.field(dto.kind).optional());
    let status = validation
        .field(dto.status)
        .optional()
        .trim()
        .capitalize()
        .one_of(
            &TicketStatus::ALL.map(|status| status.as_str()),
            ClientError::TicketStatusInvalid,
        )
        .value();
    let priority = priority(validation.field(dto.priority).optional());
    let title = title(validation.field(dto.title).optional());
    let detail = detail(validation.field(dto.detail).optional());
    let developer_ids = common::developers(&mut validation, db, dto.developers).await;

    validation.finish()?;

    Ok(UpdateTicketParams {
        kind: kind.as_deref().and_then(TicketType::parse),
        status: status.as_deref().and_then(TicketStatus::parse),
        priority: priority.as_deref().and_then(TicketPriority::parse),
        title,
        detail,
        developer_ids,
    })
}

fn kind(chain: FieldChain<'_>) -> Option<String> {
    chain
        .trim()
        .required(ClientError::TicketTypeRequired)
        .capitalize()
        .one_of(
            &TicketType::ALL.map(|kind| kind.as_str()),
            ClientError::TicketTypeInvalid,
        )
        .value()
}

fn priority(chain: FieldChain<'_>) -> Option<String> {
    chain
        .trim()
        .required(ClientError::TicketPriorityRequired)
        .capitalize()
        .one_of(
            &TicketPriority::ALL.map(|priority| priority.as_str()),
            ClientError::TicketPriorityInvalid,
        )
        .value()
}

fn title(chain: FieldChain<'_>) -> Option<String> {
    chain
        .trim()
        .required(ClientError::TitleRequired)
        .min_length(TITLE_MIN_LENGTH, ClientError::TitleTooShort)
        .max_length(TITLE_MAX_LENGTH, ClientError::TitleTooLong)
        .value()
}

fn detail(chain: FieldChain<'_>) -> Option<String> {
    chain
        .trim()
        .required(ClientError::DetailRequired)
        .max_length(DETAIL_MAX_LENGTH, ClientError::DetailTooLong)
        .value()
}

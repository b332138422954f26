use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Catalog of every error a client can receive.
///
/// The display text is the error title. Each error also has a status code, a
/// human-readable detail and a `type` path (`/errors/<slug>.html`) under which
/// the error is documented by the `GET /errors/{errorName}` route.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientError {
    #[error("Body Invalid")]
    BodyInvalid,

    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Authentication Error")]
    Authentication,
    #[error("Access Denied")]
    AccessDenied,

    #[error("User ID Invalid")]
    UserIdInvalid,
    #[error("User Not Found")]
    UserNotFound,
    #[error("Username Required")]
    UsernameRequired,
    #[error("Username Length Error")]
    UsernameLength,
    #[error("Username Invalid")]
    UsernameInvalid,
    #[error("Username Already In Use")]
    UsernameAlreadyInUse,
    #[error("Email Required")]
    EmailRequired,
    #[error("Email Invalid")]
    EmailInvalid,
    #[error("Email Already In Use")]
    EmailAlreadyInUse,
    #[error("Password Required")]
    PasswordRequired,
    #[error("Password Too Short")]
    PasswordTooShort,
    #[error("Password Invalid")]
    PasswordInvalid,
    #[error("Password Confirmation Error")]
    PasswordConfirmation,
    #[error("Role Invalid")]
    RoleInvalid,
    #[error("Avatar URL Invalid")]
    AvatarUrlInvalid,

    #[error("Project ID Invalid")]
    ProjectIdInvalid,
    #[error("Project Not Found")]
    ProjectNotFound,
    #[error("Ticket ID Invalid")]
    TicketIdInvalid,
    #[error("Ticket Not Found")]
    TicketNotFound,
    #[error("Developer Invalid")]
    DeveloperInvalid,
    #[error("Title Required")]
    TitleRequired,
    #[error("Title Too Short")]
    TitleTooShort,
    #[error("Title Too Long")]
    TitleTooLong,
    #[error("Title Invalid")]
    TitleInvalid,
    #[error("Title Already In Use")]
    TitleAlreadyInUse,
    #[error("Detail Required")]
    DetailRequired,
    #[error("Detail Too Long")]
    DetailTooLong,
    #[error("Ticket Type Required")]
    TicketTypeRequired,
    #[error("Ticket Type Invalid")]
    TicketTypeInvalid,
    #[error("Ticket Priority Required")]
    TicketPriorityRequired,
    #[error("Ticket Priority Invalid")]
    TicketPriorityInvalid,
    #[error("Ticket Status Invalid")]
    TicketStatusInvalid,

    #[error("Limit Invalid")]
    LimitInvalid,
    #[error("Limit Too Low")]
    LimitTooLow,
    #[error("Limit Too High")]
    LimitTooHigh,
    #[error("Page Invalid")]
    PageInvalid,
    #[error("Page Too Low")]
    PageTooLow,
    #[error("Page Too High")]
    PageTooHigh,
    #[error("Sort Invalid")]
    SortInvalid,

    #[error("Path Not Found")]
    PathNotFound,
    #[error("Internal Server Error")]
    InternalServerError,
}

impl ClientError {
    pub const ALL: &'static [ClientError] = &[
        Self::BodyInvalid,
        Self::Unauthenticated,
        Self::Authentication,
        Self::AccessDenied,
        Self::UserIdInvalid,
        Self::UserNotFound,
        Self::UsernameRequired,
        Self::UsernameLength,
        Self::UsernameInvalid,
        Self::UsernameAlreadyInUse,
        Self::EmailRequired,
        Self::EmailInvalid,
        Self::EmailAlreadyInUse,
        Self::PasswordRequired,
        Self::PasswordTooShort,
        Self::PasswordInvalid,
        Self::PasswordConfirmation,
        Self::RoleInvalid,
        Self::AvatarUrlInvalid,
        Self::ProjectIdInvalid,
        Self::ProjectNotFound,
        Self::TicketIdInvalid,
        Self::TicketNotFound,
        Self::DeveloperInvalid,
        Self::TitleRequired,
        Self::TitleTooShort,
        Self::TitleTooLong,
        Self::TitleInvalid,
        Self::TitleAlreadyInUse,
        Self::DetailRequired,
        Self::DetailTooLong,
        Self::TicketTypeRequired,
        Self::TicketTypeInvalid,
        Self::TicketPriorityRequired,
        Self::TicketPriorityInvalid,
        Self::TicketStatusInvalid,
        Self::LimitInvalid,
        Self::LimitTooLow,
        Self::LimitTooHigh,
        Self::PageInvalid,
        Self::PageTooLow,
        Self::PageTooHigh,
        Self::SortInvalid,
        Self::PathNotFound,
        Self::InternalServerError,
    ];

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated | Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::UserNotFound
            | Self::ProjectNotFound
            | Self::TicketNotFound
            | Self::PathNotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn title(&self) -> String {
        self.to_string()
    }

    pub fn detail(&self) -> &'static str {
        match self {
            Self::BodyInvalid => "The request body could not be parsed as JSON.",
            Self::Unauthenticated => "You must be logged in to perform this action.",
            Self::Authentication => "The provided username, email or password is incorrect.",
            Self::AccessDenied => "You do not have permission to perform this action.",
            Self::UserIdInvalid => "The provided user ID is not a valid ID.",
            Self::UserNotFound => "The requested user could not be found.",
            Self::UsernameRequired => "A username is required.",
            Self::UsernameLength => "Username must be between 3 and 24 characters long.",
            Self::UsernameInvalid => {
                "Username must start with a letter and may only contain letters, numbers, \
                 underscores, dots and dashes, without consecutive special characters or a \
                 special character at the end."
            }
            Self::UsernameAlreadyInUse => "The provided username is already in use.",
            Self::EmailRequired => "An email is required.",
            Self::EmailInvalid => "The provided email is not a valid email address.",
            Self::EmailAlreadyInUse => "The provided email is already in use.",
            Self::PasswordRequired => "A password is required.",
            Self::PasswordTooShort => "Password must be at least 8 characters long.",
            Self::PasswordInvalid => {
                "Password must contain at least one lowercase letter, one uppercase letter \
                 and one number."
            }
            Self::PasswordConfirmation => "Password and password confirmation do not match.",
            Self::RoleInvalid => {
                "Role must be one of 'User', 'Developer', 'Project Manager' or 'Admin'."
            }
            Self::AvatarUrlInvalid => "Avatar URL must be a valid http or https URL.",
            Self::ProjectIdInvalid => "The provided project ID is not a valid ID.",
            Self::ProjectNotFound => "The requested project could not be found.",
            Self::TicketIdInvalid => "The provided ticket ID is not a valid ID.",
            Self::TicketNotFound => "The requested ticket could not be found.",
            Self::DeveloperInvalid => {
                "Developers must be existing users with at least the Developer role."
            }
            Self::TitleRequired => "A title is required.",
            Self::TitleTooShort => "Title must be at least 3 characters long.",
            Self::TitleTooLong => "Title must be at most 80 characters long.",
            Self::TitleInvalid => {
                "Title must start with a letter, end with a letter or number and may only \
                 contain letters, numbers, spaces and basic punctuation."
            }
            Self::TitleAlreadyInUse => "The provided title is already in use.",
            Self::DetailRequired => "A detail is required.",
            Self::DetailTooLong => "Detail must be at most 1024 characters long.",
            Self::TicketTypeRequired => "A ticket type is required.",
            Self::TicketTypeInvalid => {
                "Ticket type must be one of 'Feature', 'Issue', 'Task' or 'Help'."
            }
            Self::TicketPriorityRequired => "A ticket priority is required.",
            Self::TicketPriorityInvalid => {
                "Ticket priority must be one of 'High', 'Medium' or 'Low'."
            }
            Self::TicketStatusInvalid => "Ticket status must be either 'Open' or 'Closed'.",
            Self::LimitInvalid => "Limit must be an integer.",
            Self::LimitTooLow => "Limit must be at least 1.",
            Self::LimitTooHigh => "Limit must be at most 100.",
            Self::PageInvalid => "Page must be an integer.",
            Self::PageTooLow => "Page must be at least 1.",
            Self::PageTooHigh => "Page is beyond the last page that can be addressed.",
            Self::SortInvalid => {
                "Sort must be a space separated list of resource fields, each optionally \
                 prefixed with '-' for descending order."
            }
            Self::PathNotFound => {
                "The requested path could not be found. It either does not exist on the \
                 server or is misspelled."
            }
            Self::InternalServerError => {
                "Some internal server error occurred. Please try again later."
            }
        }
    }

    /// Kebab-case form of the title, e.g. `path-not-found`.
    pub fn slug(&self) -> String {
        self.title().to_lowercase().replace(' ', "-")
    }

    /// Documentation path sent as the `type` of error responses.
    pub fn type_path(&self) -> String {
        format!("/errors/{}.html", self.slug())
    }

    /// Finds an error by name, ignoring case, dashes and a `.html` suffix.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_suffix(".html").unwrap_or(name).replace('-', "");

        Self::ALL
            .iter()
            .copied()
            .find(|err| err.title().replace(' ', "").eq_ignore_ascii_case(&name))
    }

    pub fn to_dto(&self) -> ErrorDto {
        ErrorDto {
            kind: self.type_path(),
            status: self.status().as_u16(),
            title: self.title(),
            detail: self.detail().to_string(),
            stack: None,
        }
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_dto())).into_response()
    }
}

//! Validation of registration and account edit forms.

use std::sync::LazyLock;

use regex::Regex;
use sea_orm::DatabaseConnection;
use url::Url;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserRole},
    server::{
        data::user::UserRepository,
        error::{client::ClientError, AppError},
        model::user::{RegisterUserParams, UpdateUserParams},
        validator::Validation,
    },
};

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 24;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Starts with a letter; `_`, `.` and `-` must each be followed by a letter
/// or digit.
static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z](?:[A-Za-z0-9]|[._-][A-Za-z0-9])*$").expect("valid username regex")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*\.[a-z]{2,}$",
    )
    .expect("valid email regex")
});

/// Validates a registration form.
///
/// # Returns
/// - `Ok(RegisterUserParams)` - Sanitized username, lowercased email and
///   the plain text password
/// - `Err(AppError)` - The first failed check
pub async fn create(
    db: &DatabaseConnection,
    dto: CreateUserDto,
) -> Result<RegisterUserParams, AppError> {
    let mut validation = Validation::new();

    let username = username(&mut validation, db, dto.username, None).await;
    let email = email(&mut validation, db, dto.email, None).await;
    let password = password(&mut validation, dto.password, dto.confirm, false);

    validation.finish()?;

    Ok(RegisterUserParams {
        username: username.unwrap_or_default(),
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default(),
    })
}

/// Validates an account edit form for user `user_id`.
///
/// Every field is optional. Uniqueness checks ignore the edited account so a
/// user can resubmit their own username.
pub async fn edit(
    db: &DatabaseConnection,
    user_id: i32,
    dto: UpdateUserDto,
) -> Result<UpdateUserParams, AppError> {
    let mut validation = Validation::new();

    let username = username(&mut validation, db, dto.username, Some(user_id)).await;
    let email = email(&mut validation, db, dto.email, Some(user_id)).await;
    let password = password(&mut validation, dto.new_password, dto.confirm, true);

    let role = validation
        .field(dto.role)
        .optional()
        .trim()
        .one_of(&UserRole::ALL.map(|role| role.as_str()), ClientError::RoleInvalid)
        .value();

    // An empty avatar URL clears the avatar.
    let avatar_url = validation
        .field(dto.avatar_url)
        .optional()
        .trim()
        .check(
            |url| url.is_empty() || is_http_url(url),
            ClientError::AvatarUrlInvalid,
        )
        .value();

    validation.finish()?;

    Ok(UpdateUserParams {
        username,
        email,
        password,
        role: role.as_deref().and_then(UserRole::parse),
        avatar_url,
    })
}

async fn username(
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
        .required(ClientError::UsernameRequired)
        .min_length(USERNAME_MIN_LENGTH, ClientError::UsernameLength)
        .max_length(USERNAME_MAX_LENGTH, ClientError::UsernameLength)
        .matches(&USERNAME_PATTERN, ClientError::UsernameInvalid)
        .unique(
            |username| async move {
                UserRepository::new(db)
                    .username_taken(&username, editing)
                    .await
            },
            ClientError::UsernameAlreadyInUse,
        )
        .await
        .value()
}

async fn email(
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
        .lowercase()
        .required(ClientError::EmailRequired)
        .matches(&EMAIL_PATTERN, ClientError::EmailInvalid)
        .unique(
            |email| async move { UserRepository::new(db).email_taken(&email, editing).await },
            ClientError::EmailAlreadyInUse,
        )
        .await
        .value()
}

fn password(
    validation: &mut Validation,
    value: Option<String>,
    confirm: Option<String>,
    optional: bool,
) -> Option<String> {
    let mut chain = validation.field(value);
    if optional {
        chain = chain.optional();
    }

    let confirm = confirm.unwrap_or_default();

    chain
        .trim()
        .required(ClientError::PasswordRequired)
        .min_length(PASSWORD_MIN_LENGTH, ClientError::PasswordTooShort)
        .check(is_strong_password, ClientError::PasswordInvalid)
        .check(
            |password| password == confirm.trim(),
            ClientError::PasswordConfirmation,
        )
        .value()
}

/// At least one lowercase letter, one uppercase letter and one digit.
fn is_strong_password(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

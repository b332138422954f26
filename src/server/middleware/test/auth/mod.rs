use crate::{
    model::user::UserRole,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{no_role_edit, AuthGuard},
            session::AuthSession,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod custom;
mod is_correct_password;
mod is_own_account;
mod is_role;
mod require;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::{
            query::{ListParams, SortDirection, SortKey},
            user::{CreateUserParams, UserChangeset, UserSortField},
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod email_taken;
mod find_by_ids;
mod find_by_username_or_email;
mod get_paginated;
mod update;

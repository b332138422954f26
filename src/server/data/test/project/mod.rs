use crate::server::{
    data::project::ProjectRepository,
    error::AppError,
    model::{
        project::{CreateProjectParams, ProjectSortField, UpdateProjectParams},
        query::{ListParams, SortDirection, SortKey},
        reference::Ref,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod find_by_id;
mod get_paginated;
mod title_taken;
mod update;

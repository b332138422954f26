use crate::{
    model::ticket::{TicketPriority, TicketStatus, TicketType},
    server::{
        data::ticket::TicketRepository,
        error::AppError,
        model::{
            query::{ListParams, SortDirection, SortKey},
            reference::Ref,
            ticket::{CreateTicketParams, TicketSortField, UpdateTicketParams},
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_paginated;
mod update;

//! User data repository for database operations.
//!
//! Usernames are matched through the lowercased `username_key` column and
//! emails are stored lowercased, so every lookup here is case-insensitive.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    model::user::UserRole,
    server::{
        error::AppError,
        model::{
            query::ListParams,
            user::{CreateUserParams, User, UserChangeset, UserSortField},
        },
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with the default role.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr(_))` - Insert failed, e.g. a unique constraint
    ///   was violated
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            username_key: ActiveValue::Set(params.username.to_lowercase()),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email.to_lowercase()),
            hash: ActiveValue::Set(params.hash),
            role: ActiveValue::Set(UserRole::default().as_str().to_string()),
            register_date: ActiveValue::Set(Utc::now()),
            avatar_url: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds every user whose id is in `ids`. Missing ids are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Finds the user whose username or email matches `login`, ignoring case.
    pub async fn find_by_username_or_email(&self, login: &str) -> Result<Option<User>, AppError> {
        let key = login.trim().to_lowercase();

        entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::UsernameKey.eq(key.clone()))
                    .add(entity::user::Column::Email.eq(key)),
            )
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Checks whether `username` is used by any account other than `exclude`.
    pub async fn username_taken(
        &self,
        username: &str,
        exclude: Option<i32>,
    ) -> Result<bool, AppError> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::UsernameKey.eq(username.to_lowercase()));
        if let Some(id) = exclude {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether `email` is used by any account other than `exclude`.
    pub async fn email_taken(&self, email: &str, exclude: Option<i32>) -> Result<bool, AppError> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()));
        if let Some(id) = exclude {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets one page of users.
    ///
    /// Sort keys are applied in order, followed by ascending id so pages are
    /// stable.
    pub async fn get_paginated(
        &self,
        params: &ListParams<UserSortField>,
    ) -> Result<Vec<User>, AppError> {
        let mut query = entity::prelude::User::find();
        for key in &params.sort {
            let column = match key.field {
                UserSortField::Id => entity::user::Column::Id,
                UserSortField::Username => entity::user::Column::UsernameKey,
                UserSortField::Role => entity::user::Column::Role,
                UserSortField::RegisterDate => entity::user::Column::RegisterDate,
                UserSortField::AvatarUrl => entity::user::Column::AvatarUrl,
            };
            query = query.order_by(column, key.direction.order());
        }

        query
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, params.limit)
            .fetch_page(params.page.saturating_sub(1))
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Applies a changeset to user `id`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error
    pub async fn update(&self, id: i32, changes: UserChangeset) -> Result<Option<User>, AppError> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(username) = changes.username {
            active_model.username_key = ActiveValue::Set(username.to_lowercase());
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(email) = changes.email {
            active_model.email = ActiveValue::Set(email.to_lowercase());
        }
        if let Some(hash) = changes.hash {
            active_model.hash = ActiveValue::Set(hash);
        }
        if let Some(role) = changes.role {
            active_model.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(avatar_url) = changes.avatar_url {
            active_model.avatar_url =
                ActiveValue::Set(Some(avatar_url).filter(|url| !url.is_empty()));
        }

        let entity = active_model.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }

    /// Deletes user `id`.
    ///
    /// Projects managed and tickets submitted by the user are kept with their
    /// reference cleared; developer assignments are removed.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::Project::update_many()
            .col_expr(
                entity::project::Column::ManagerId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::project::Column::ManagerId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Ticket::update_many()
            .col_expr(
                entity::ticket::Column::SubmitterId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::ticket::Column::SubmitterId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::ProjectDeveloper::delete_many()
            .filter(entity::project_developer::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::TicketDeveloper::delete_many()
            .filter(entity::ticket_developer::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::User::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

//! User service for business logic.
//!
//! Hashes passwords before they reach the repository and otherwise passes
//! validated parameters through.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        query::ListParams,
        user::{
            CreateUserParams, RegisterUserParams, UpdateUserParams, User, UserChangeset,
            UserSortField,
        },
    },
    util::password::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account with the default role.
    pub async fn create(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let hash = hash_password(&params.password)?;

        UserRepository::new(self.db)
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                hash,
            })
            .await
    }

    pub async fn get_all(&self, params: &ListParams<UserSortField>) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_paginated(params).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db).find_by_id(id).await
    }

    /// Applies an account edit; a new password is hashed first.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, AppError> {
        let hash = params
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        UserRepository::new(self.db)
            .update(
                id,
                UserChangeset {
                    username: params.username,
                    email: params.email,
                    hash,
                    role: params.role,
                    avatar_url: params.avatar_url,
                },
            )
            .await
    }

    /// Deletes an account. Returns `false` if it did not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        UserRepository::new(self.db).delete(id).await
    }
}

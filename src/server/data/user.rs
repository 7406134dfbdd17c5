//! User data repository for database operations.
//!
//! `UserRepository` handles account creation and lookups. Password hashes never
//! leave this module except through `find_credentials_by_email`, which the
//! login flow uses to verify a password.

use chrono::Utc;
use entity::user::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Arguments
    /// - `params` - Account fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            tel: ActiveValue::Set(params.tel),
            role: ActiveValue::Set(params.role),
            password_hash: ActiveValue::Set(params.password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by normalized (lowercase) email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        Ok(self
            .find_credentials_by_email(email)
            .await?
            .map(|(user, _)| user))
    }

    /// Finds a user by email together with the stored PHC password hash.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password_hash.clone();
            (User::from_entity(e), hash)
        }))
    }

    /// Checks whether at least one admin account exists.
    ///
    /// Used at startup to decide whether the configured admin must be seeded.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

//! Account registration, login and the startup admin bootstrap.

use entity::user::Role;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{normalize_email, CreateUserParams, RegisterParams, User},
    util::password::PasswordHasher,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    hasher: &'a PasswordHasher,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, hasher: &'a PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Registers a regular user account.
    ///
    /// # Arguments
    /// - `params` - Validated registration input with the plain text password
    ///
    /// # Returns
    /// - `Ok(User)` - The new account with role `user`
    /// - `Err(AppError::Validation)` - Password too short or email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let password_hash = self.hasher.hash(&params.password)?;

        UserRepository::new(self.db)
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                tel: params.tel,
                role: Role::User,
                password_hash,
            })
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Validation("Email is already registered".to_string())
                }
                _ => e.into(),
            })
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some((user, hash)) = UserRepository::new(self.db)
            .find_credentials_by_email(&normalize_email(email))
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.hasher.verify(password, &hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Creates the configured admin account when no admin exists yet.
    ///
    /// # Arguments
    /// - `email` - Admin login email
    /// - `password` - Admin password in plain text
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Admin account created
    /// - `Ok(None)` - An admin already exists, nothing changed
    /// - `Err(AppError)` - Password too short or database error
    pub async fn seed_admin(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);
        if repo.admin_exists().await? {
            return Ok(None);
        }

        let password_hash = self.hasher.hash(password)?;
        let user = repo
            .create(CreateUserParams {
                name: "Administrator".to_string(),
                email: normalize_email(email),
                tel: None,
                role: Role::Admin,
                password_hash,
            })
            .await?;

        Ok(Some(user))
    }
}

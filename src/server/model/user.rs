//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::user::Role;

use crate::{
    model::user::{RegisterDto, RoleDto, UserDto},
    server::error::AppError,
};

/// Account without its password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub tel: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            tel: entity.tel,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            tel: self.tel,
            role: match self.role {
                Role::User => RoleDto::User,
                Role::Admin => RoleDto::Admin,
            },
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting an account. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub tel: Option<String>,
    pub role: Role,
    pub password_hash: String,
}

/// Validated registration input, password still in plain text.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub tel: Option<String>,
    pub password: String,
}

impl RegisterParams {
    /// Validates a registration payload.
    ///
    /// Emails are stored lowercased. Password length is checked by the hasher.
    ///
    /// # Returns
    /// - `Ok(RegisterParams)` - Validated parameters
    /// - `Err(AppError::Validation)` - Missing name or malformed email
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Please add a name".to_string()));
        }

        let email = normalize_email(&dto.email);
        if !is_plausible_email(&email) {
            return Err(AppError::Validation(
                "Please add a valid email".to_string(),
            ));
        }

        Ok(Self {
            name,
            email,
            tel: dto
                .tel
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            password: dto.password,
        })
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// `local@domain.tld` with no whitespace.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

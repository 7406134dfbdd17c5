use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    Admin,
}

/// Resolves the session user and checks permissions before any handler logic runs.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user holding every listed permission.
    ///
    /// An empty slice only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin-only action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

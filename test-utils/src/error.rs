use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create a table.
    ///
    /// Session store migration failures are folded into this variant as
    /// `DbErr::Custom`.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

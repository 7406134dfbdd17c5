use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbErr};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// In-memory SQLite database plus an optional cookie-less session for one test.
///
/// Both fields are filled lazily and dropped with the context, which discards
/// the database.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    /// Session stored in the same database, created by `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Connection to the test database, connecting on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        self.db
            .as_ref()
            .ok_or_else(|| DbErr::Custom("test database missing".to_string()).into())
    }

    /// Runs CREATE TABLE statements in the given order.
    ///
    /// # Returns
    /// - `Ok(())` - Every table exists
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }

    /// Session store sharing the test database pool, with its table created.
    ///
    /// Router tests wrap it in a `SessionManagerLayer` so cookie sessions carry
    /// over between requests.
    ///
    /// # Returns
    /// - `Ok(SqliteStore)` - Migrated store
    /// - `Err(TestError::Database)` - Creating the session table failed
    pub async fn session_store(&mut self) -> Result<SqliteStore, TestError> {
        let pool = self.database().await?.get_sqlite_connection_pool().clone();
        let store = SqliteStore::new(pool);

        store
            .migrate()
            .await
            .map_err(|e| DbErr::Custom(format!("session store migration: {}", e)))?;

        Ok(store)
    }

    /// Session used by middleware and controller tests that call the session
    /// API directly instead of going through cookies.
    ///
    /// Created once with the production seven day inactivity expiry and reused
    /// on later calls.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = self.session_store().await?;
            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| DbErr::Custom("test session missing".to_string()).into())
    }

    /// Database and session together, for tests that need both borrows at once.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Assembles an in-memory SQLite schema for a single test.
///
/// Tables are created from SeaORM entities in the order they were added, so an
/// entity with foreign keys must come after the entities it references.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Hotel)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    schema: Schema,
    /// Pending CREATE TABLE statements, executed by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            schema: Schema::new(DbBackend::Sqlite),
            tables: Vec::new(),
        }
    }

    /// Queues the table of `entity`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let stmt = self.schema.create_table_from_entity(entity);
        self.tables.push(stmt);
        self
    }

    /// Queues the user, hotel and booking tables in foreign key order.
    ///
    /// Enough for every repository, service and router test.
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User).with_table(Hotel).with_table(Booking)
    }

    /// Connects to a fresh in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose `db` is connected and migrated
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

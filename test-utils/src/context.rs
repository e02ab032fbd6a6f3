use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Isolated database for a single test.
///
/// Each context owns its own in-memory SQLite database, so tests never observe each
/// other's rows.
#[derive(Default)]
pub struct TestContext {
    /// Connection to the in-memory database, opened on first use.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the connection, opening the in-memory database if needed.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Open connection
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db.as_ref().ok_or(TestError::NoDatabase)
    }

    /// Runs the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; tests rarely need it directly.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }
}

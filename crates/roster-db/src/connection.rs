//! Database connection management.
//!
//! [`DbConnection`] owns a configured SQLite connection: pragmas are set and
//! schema migrations are applied before any caller can touch application
//! data.

use std::path::Path;

use diesel::{sql_query, Connection, RunQueryDsl, SqliteConnection};
use tracing::debug;

use crate::error::{DbError, Result};
use crate::migration::apply_migrations;

/// Database connection wrapper with migration support.
pub struct DbConnection {
    conn: SqliteConnection,
}

impl DbConnection {
    /// Opens a database file and runs pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy();
        debug!(path = %path_str, "opening roster database");

        let mut conn = SqliteConnection::establish(&path_str)?;

        // WAL mode for better concurrent access
        sql_query("PRAGMA journal_mode = WAL;").execute(&mut conn)?;

        Self::bootstrap(conn)
    }

    /// Opens a private in-memory database and runs pending migrations.
    pub fn open_in_memory() -> Result<Self> {
        let conn = SqliteConnection::establish(":memory:")?;
        Self::bootstrap(conn)
    }

    fn bootstrap(mut conn: SqliteConnection) -> Result<Self> {
        // members.team_id is only enforced while this pragma is on.
        sql_query("PRAGMA foreign_keys = ON;").execute(&mut conn)?;

        apply_migrations(&mut conn).map_err(|e| DbError::MigrationError(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Gets a mutable reference to the underlying connection.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}

impl std::ops::Deref for DbConnection {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl std::ops::DerefMut for DbConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

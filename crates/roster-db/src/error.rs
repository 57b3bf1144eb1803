//! Error types for roster-db.

use miette::Diagnostic;
use thiserror::Error;

/// Database error type for roster-db operations.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Database connection failed: {0}")]
    #[diagnostic(
        code(roster_db::connection),
        help("Check if the database file exists and is accessible")
    )]
    ConnectionError(String),

    #[error("Database query failed: {0}")]
    #[diagnostic(code(roster_db::query))]
    QueryError(String),

    #[error("Database migration failed: {0}")]
    #[diagnostic(
        code(roster_db::migration),
        help("The database schema may be corrupted. Remove the file and reopen.")
    )]
    MigrationError(String),

    #[error("Record not found: {0}")]
    #[diagnostic(code(roster_db::not_found))]
    NotFound(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(roster_db::io), help("Check file permissions and disk space"))]
    IoError(#[from] std::io::Error),
}

impl From<diesel::result::Error> for DbError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => DbError::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(_, info) => {
                DbError::QueryError(info.message().to_string())
            }
            other => DbError::QueryError(other.to_string()),
        }
    }
}

impl From<diesel::result::ConnectionError> for DbError {
    fn from(err: diesel::result::ConnectionError) -> Self {
        DbError::ConnectionError(err.to_string())
    }
}

/// Result type alias for roster-db operations.
pub type Result<T> = std::result::Result<T, DbError>;

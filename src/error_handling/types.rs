//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations, one per bootstrap step.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum DatabaseError {
    /// The connection could not be established (or the options were invalid).
    #[error("Database connection error: {0}")]
    ConnectError(#[source] sqlx::Error),

    /// The catalog query could not be executed.
    #[error("Catalog query error: {0}")]
    CatalogQueryError(#[source] sqlx::Error),

    /// A catalog row could not be decoded.
    #[error("Catalog row decode error: {0}")]
    RowDecodeError(#[source] sqlx::Error),

    /// The CREATE TABLE statement failed.
    #[error("Failed to create table {table}: {source}")]
    CreateTableError {
        /// Table the statement targeted
        table: String,
        /// Driver error
        #[source]
        source: sqlx::Error,
    },

    /// The table name is not safe to splice into DDL.
    #[error("Invalid table name '{0}': expected a plain SQL identifier")]
    InvalidTableName(String),
}

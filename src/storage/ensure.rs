//! The idempotent "ensure table exists" step.

use log::{debug, info, log_enabled, warn, Level};
use strum_macros::Display;

use crate::config::CATALOG_SCHEMA;
use crate::error_handling::DatabaseError;
use crate::storage::catalog::SchemaCatalog;
use crate::storage::schema::{validate_identifier, TableDefinition};

/// What `ensure_table` found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TableOutcome {
    /// The table was already in the catalog; no DDL was issued.
    AlreadyExists,
    /// The table was missing and one CREATE TABLE was executed.
    Created,
}

/// Creates `table` unless the catalog already lists it.
///
/// Issues one catalog query, then at most one CREATE TABLE. There is no
/// transaction around the two: a concurrent creator is tolerated by the
/// statement's `IF NOT EXISTS`. When debug logging is enabled and the table
/// was just created, one more query reads its columns back from
/// `information_schema.columns` for the log.
///
/// # Errors
///
/// - `InvalidTableName` before touching the database if the name is not a
///   plain identifier
/// - `CatalogQueryError` / `RowDecodeError` if the table list cannot be read
/// - `CreateTableError` if the DDL fails
pub async fn ensure_table<C: SchemaCatalog>(
    catalog: &mut C,
    table: &TableDefinition,
) -> Result<TableOutcome, DatabaseError> {
    validate_identifier(&table.name)?;

    let tables = catalog.list_tables().await?;
    debug!(
        "Schema {} has {} table(s): {:?}",
        CATALOG_SCHEMA,
        tables.len(),
        tables
    );

    if tables.iter().any(|name| *name == table.name) {
        info!("Table {} already created", table.name);
        return Ok(TableOutcome::AlreadyExists);
    }

    catalog.create_table(table).await?;
    info!("Table {} successfully created", table.name);

    if log_enabled!(Level::Debug) {
        match catalog.table_columns(&table.name).await {
            Ok(columns) => debug!("Table {} columns: {}", table.name, columns.join(", ")),
            Err(e) => warn!("Could not read back columns of {}: {e}", table.name),
        }
    }

    Ok(TableOutcome::Created)
}

//! Schema catalog access.
//!
//! `SchemaCatalog` is the narrow surface the bootstrap needs from a database:
//! list the tables of the public schema, create a table, and list a table's
//! columns. `PgConnection` implements it against `information_schema`.

use log::{debug, error};
use sqlx::{PgConnection, Row};

use crate::config::CATALOG_SCHEMA;
use crate::error_handling::DatabaseError;
use crate::storage::schema::TableDefinition;

// information_schema exposes names as the sql_identifier domain, which sqlx
// will not decode as String without the cast.
const LIST_TABLES_SQL: &str = "SELECT table_name::text AS table_name
    FROM information_schema.tables
    WHERE table_schema::text = $1
    ORDER BY table_name";

const LIST_COLUMNS_SQL: &str = "SELECT column_name::text AS column_name
    FROM information_schema.columns
    WHERE table_schema::text = $1 AND table_name::text = $2
    ORDER BY ordinal_position";

/// Catalog operations used by the bootstrap.
#[allow(async_fn_in_trait)]
pub trait SchemaCatalog {
    /// Names of all tables in the public schema, sorted lexicographically.
    async fn list_tables(&mut self) -> Result<Vec<String>, DatabaseError>;

    /// Executes the CREATE TABLE statement for `table`.
    async fn create_table(&mut self, table: &TableDefinition) -> Result<(), DatabaseError>;

    /// Column names of a public table in ordinal order (empty if the table is absent).
    async fn table_columns(&mut self, table: &str) -> Result<Vec<String>, DatabaseError>;
}

impl SchemaCatalog for PgConnection {
    async fn list_tables(&mut self) -> Result<Vec<String>, DatabaseError> {
        let rows = sqlx::query(LIST_TABLES_SQL)
            .bind(CATALOG_SCHEMA)
            .fetch_all(&mut *self)
            .await
            .map_err(|e| {
                error!("Failed to query table catalog: {e}");
                DatabaseError::CatalogQueryError(e)
            })?;

        rows.iter()
            .map(|row| {
                row.try_get::<String, _>("table_name")
                    .map_err(DatabaseError::RowDecodeError)
            })
            .collect()
    }

    async fn create_table(&mut self, table: &TableDefinition) -> Result<(), DatabaseError> {
        let sql = table.create_sql()?;
        debug!("Executing: {sql}");
        sqlx::query(&sql)
            .execute(&mut *self)
            .await
            .map_err(|e| {
                error!("Failed to create table {}: {e}", table.name);
                DatabaseError::CreateTableError {
                    table: table.name.clone(),
                    source: e,
                }
            })?;
        Ok(())
    }

    async fn table_columns(&mut self, table: &str) -> Result<Vec<String>, DatabaseError> {
        let rows = sqlx::query(LIST_COLUMNS_SQL)
            .bind(CATALOG_SCHEMA)
            .bind(table)
            .fetch_all(&mut *self)
            .await
            .map_err(DatabaseError::CatalogQueryError)?;

        rows.iter()
            .map(|row| {
                row.try_get::<String, _>("column_name")
                    .map_err(DatabaseError::RowDecodeError)
            })
            .collect()
    }
}

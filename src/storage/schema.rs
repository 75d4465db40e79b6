// storage/schema.rs
// Table definitions and DDL generation

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{MAX_IDENTIFIER_LEN, POSTS_TABLE};
use crate::error_handling::DatabaseError;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

/// One column of a table definition: name and its Postgres type clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name as written in the DDL
    pub name: &'static str,
    /// Type and constraint clause
    pub sql_type: &'static str,
}

/// A fixed-schema table the bootstrap can ensure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    /// Unqualified table name, created in the public schema
    pub name: String,
    /// Columns in creation order
    pub columns: &'static [ColumnDef],
}

/// Columns of the `posts` table, in creation order.
pub const POSTS_COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        name: "id",
        sql_type: "SERIAL PRIMARY KEY",
    },
    ColumnDef {
        name: "title",
        sql_type: "TEXT",
    },
    ColumnDef {
        name: "url",
        sql_type: "TEXT",
    },
    ColumnDef {
        name: "type",
        sql_type: "TEXT",
    },
    ColumnDef {
        name: "score",
        sql_type: "INT",
    },
    ColumnDef {
        name: "timestamp",
        sql_type: "TIMESTAMP",
    },
];

impl TableDefinition {
    /// The `posts` table holding Hacker News items.
    pub fn posts() -> Self {
        Self {
            name: POSTS_TABLE.to_string(),
            columns: POSTS_COLUMNS,
        }
    }

    /// Column names in creation order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Renders the CREATE TABLE statement.
    ///
    /// The table name is spliced into the statement text (DDL cannot take bind
    /// parameters), so it is validated first.
    pub fn create_sql(&self) -> Result<String, DatabaseError> {
        validate_identifier(&self.name)?;
        let columns = self
            .columns
            .iter()
            .map(|c| format!("    {} {}", c.name, c.sql_type))
            .collect::<Vec<_>>()
            .join(",\n");
        Ok(format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
            self.name, columns
        ))
    }
}

/// Accepts plain SQL identifiers only: letters, digits, underscores, not
/// starting with a digit, at most 63 bytes.
pub fn validate_identifier(name: &str) -> Result<(), DatabaseError> {
    if name.len() > MAX_IDENTIFIER_LEN || !IDENTIFIER.is_match(name) {
        return Err(DatabaseError::InvalidTableName(name.to_string()));
    }
    Ok(())
}

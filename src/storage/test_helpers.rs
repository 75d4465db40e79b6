//! Shared test helpers for storage module tests.
//!
//! `RecordingCatalog` stands in for a database: it holds a table list, records
//! every CREATE it is asked to run, and can be told to fail either step.

#![cfg(test)]

use std::collections::HashMap;

use crate::error_handling::DatabaseError;
use crate::storage::SchemaCatalog;
use crate::storage::TableDefinition;

#[derive(Debug, Default)]
pub struct RecordingCatalog {
    pub tables: Vec<String>,
    pub columns: HashMap<String, Vec<String>>,
    pub created: Vec<String>,
    pub list_calls: usize,
    pub fail_list: bool,
    pub fail_create: bool,
}

impl RecordingCatalog {
    pub fn with_tables(tables: &[&str]) -> Self {
        let mut tables: Vec<String> = tables.iter().map(|t| t.to_string()).collect();
        tables.sort();
        Self {
            tables,
            ..Default::default()
        }
    }
}

impl SchemaCatalog for RecordingCatalog {
    async fn list_tables(&mut self) -> Result<Vec<String>, DatabaseError> {
        self.list_calls += 1;
        if self.fail_list {
            return Err(DatabaseError::CatalogQueryError(sqlx::Error::PoolClosed));
        }
        Ok(self.tables.clone())
    }

    async fn create_table(&mut self, table: &TableDefinition) -> Result<(), DatabaseError> {
        if self.fail_create {
            return Err(DatabaseError::CreateTableError {
                table: table.name.clone(),
                source: sqlx::Error::PoolClosed,
            });
        }
        self.created.push(table.name.clone());
        if !self.tables.contains(&table.name) {
            self.tables.push(table.name.clone());
            self.tables.sort();
        }
        self.columns.insert(
            table.name.clone(),
            table.column_names().into_iter().map(String::from).collect(),
        );
        Ok(())
    }

    async fn table_columns(&mut self, table: &str) -> Result<Vec<String>, DatabaseError> {
        Ok(self.columns.get(table).cloned().unwrap_or_default())
    }
}

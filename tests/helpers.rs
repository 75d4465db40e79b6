// Shared test helpers for catalog fakes, log capture and database setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.
// Each test binary uses a different subset.
#![allow(dead_code)]

use std::sync::{Mutex, OnceLock};

use hn_bootstrap::{Config, DatabaseError, SchemaCatalog, TableDefinition};
use log::{Log, Metadata, Record};

/// In-memory catalog that records the DDL it is asked to run.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    pub tables: Vec<String>,
    pub created: Vec<String>,
}

impl MemoryCatalog {
    pub fn with_tables(tables: &[&str]) -> Self {
        Self {
            tables: tables.iter().map(|t| t.to_string()).collect(),
            created: Vec::new(),
        }
    }
}

impl SchemaCatalog for MemoryCatalog {
    async fn list_tables(&mut self) -> Result<Vec<String>, DatabaseError> {
        let mut tables = self.tables.clone();
        tables.sort();
        Ok(tables)
    }

    async fn create_table(&mut self, table: &TableDefinition) -> Result<(), DatabaseError> {
        table.create_sql()?;
        self.created.push(table.name.clone());
        self.tables.push(table.name.clone());
        Ok(())
    }

    async fn table_columns(&mut self, table: &str) -> Result<Vec<String>, DatabaseError> {
        if self.tables.iter().any(|t| t == table) {
            Ok(TableDefinition::posts()
                .column_names()
                .into_iter()
                .map(String::from)
                .collect())
        } else {
            Ok(Vec::new())
        }
    }
}

/// Logger that keeps every formatted message in memory.
struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(format!("[{}] {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: OnceLock<&'static CaptureLogger> = OnceLock::new();

/// Installs the capturing logger (once per test binary) and returns it.
fn capture_logger() -> &'static CaptureLogger {
    CAPTURE.get_or_init(|| {
        let logger: &'static CaptureLogger = Box::leak(Box::new(CaptureLogger {
            lines: Mutex::new(Vec::new()),
        }));
        log::set_logger(logger).expect("no other logger in this test binary");
        log::set_max_level(log::LevelFilter::Info);
        logger
    })
}

/// Starts capturing log output at info level.
pub fn start_log_capture() {
    capture_logger();
}

/// All messages captured so far.
pub fn captured_logs() -> Vec<String> {
    capture_logger()
        .lines
        .lock()
        .map(|lines| lines.clone())
        .unwrap_or_default()
}

/// Connection URL of a disposable test database, if one is configured.
pub fn test_database_url() -> Option<String> {
    std::env::var(hn_bootstrap::config::TEST_DATABASE_URL_ENV)
        .ok()
        .filter(|url| !url.is_empty())
}

/// Config pointing at `url`.
pub fn config_for(url: &str) -> Config {
    Config {
        database_url: Some(url.to_string()),
        ..Default::default()
    }
}

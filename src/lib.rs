//! hn_bootstrap library: one-shot database bootstrap for the posts table
//!
//! Connects to PostgreSQL, reads the table list of the `public` schema and
//! creates the `posts` table when it is missing. Running it again is a no-op.
//!
//! # Example
//!
//! ```no_run
//! use hn_bootstrap::{run_bootstrap, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     host: "db.internal".to_string(),
//!     port: 5432,
//!     ..Default::default()
//! };
//!
//! let report = run_bootstrap(config).await?;
//! println!("{}: {}", report.table, report.outcome);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Library functions are async and need a Tokio runtime. A single-threaded
//! runtime is enough; nothing is spawned.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, SslMode};
pub use error_handling::{DatabaseError, InitializationError};
pub use run::{run_bootstrap, BootstrapReport};
pub use storage::{
    connect, ensure_table, Post, SchemaCatalog, TableDefinition, TableOutcome,
};

// Internal run module (connect, ensure, close)
mod run {
    use anyhow::{Context, Result};
    use log::{info, warn};
    use sqlx::Connection;

    use crate::config::Config;
    use crate::storage::{connect, ensure_table, TableDefinition, TableOutcome};

    /// Result of a bootstrap run.
    #[derive(Debug, Clone)]
    pub struct BootstrapReport {
        /// Table that was ensured
        pub table: String,
        /// Whether it already existed or was created
        pub outcome: TableOutcome,
        /// Connection target without credentials
        pub target: String,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Ensures the `posts` table exists in the configured database.
    ///
    /// Opens one connection, runs the catalog check and (if needed) the
    /// CREATE TABLE, then closes the connection whether or not the check
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error wrapping a [`crate::DatabaseError`] if:
    /// - The connection cannot be established (no catalog query is attempted)
    /// - The catalog query fails or a row cannot be decoded
    /// - The CREATE TABLE statement fails
    pub async fn run_bootstrap(config: Config) -> Result<BootstrapReport> {
        let start_time = std::time::Instant::now();
        let target = config.redacted_target();
        let table = TableDefinition::posts();

        let mut conn = connect(&config)
            .await
            .context("Failed to connect to database")?;

        let result = ensure_table(&mut conn, &table).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection cleanly: {e}");
        }

        let outcome = result.with_context(|| format!("Failed to ensure table {}", table.name))?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!("Bootstrap finished in {elapsed_seconds:.3}s");

        Ok(BootstrapReport {
            table: table.name,
            outcome,
            target,
            elapsed_seconds,
        })
    }
}

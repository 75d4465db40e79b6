//! Database operations: connection, catalog access, table definitions.

mod catalog;
mod connection;
mod ensure;
mod models;
mod schema;
mod test_helpers;

// Re-export commonly used items
pub use catalog::SchemaCatalog;
pub use connection::connect;
pub use ensure::{ensure_table, TableOutcome};
pub use models::Post;
pub use schema::{validate_identifier, ColumnDef, TableDefinition, POSTS_COLUMNS};

//! Configuration constants.
//!
//! Defaults for the connection parameters and the fixed names the bootstrap
//! works with.

/// Default database host
pub const DEFAULT_DB_HOST: &str = "localhost";
/// Default database port (the docker-compose mapping used by the posts database)
pub const DEFAULT_DB_PORT: u16 = 54320;
/// Default database user
pub const DEFAULT_DB_USER: &str = "postgres";
/// Default database password
pub const DEFAULT_DB_PASSWORD: &str = "password";
/// Default database name
pub const DEFAULT_DB_NAME: &str = "hn_db";

/// Schema the catalog query inspects.
pub const CATALOG_SCHEMA: &str = "public";

/// Name of the table the bootstrap ensures.
pub const POSTS_TABLE: &str = "posts";

/// Longest identifier Postgres keeps without truncation (NAMEDATALEN - 1).
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// Environment variable consulted by the Postgres integration tests.
pub const TEST_DATABASE_URL_ENV: &str = "HN_BOOTSTRAP_TEST_DATABASE_URL";

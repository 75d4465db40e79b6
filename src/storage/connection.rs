//! Database connection management.
//!
//! The bootstrap holds exactly one connection for the length of a run; there
//! is no pool. The caller owns the returned connection and is responsible for
//! closing it (dropping it also closes the socket).

use log::{error, info};
use sqlx::{ConnectOptions, PgConnection};

use crate::config::Config;
use crate::error_handling::DatabaseError;

/// Opens a single connection to the configured database.
///
/// # Errors
///
/// Returns `DatabaseError::ConnectError` if the connection options are invalid
/// (for example an unparsable `database_url`) or the server cannot be reached
/// or refuses the credentials.
pub async fn connect(config: &Config) -> Result<PgConnection, DatabaseError> {
    let target = config.redacted_target();
    let options = config.connect_options().map_err(|e| {
        error!("Invalid connection options for {target}: {e}");
        DatabaseError::ConnectError(e)
    })?;

    let conn = options.connect().await.map_err(|e| {
        error!("Failed to connect to database {target}: {e}");
        DatabaseError::ConnectError(e)
    })?;

    info!("Connected to database {target}");
    Ok(conn)
}

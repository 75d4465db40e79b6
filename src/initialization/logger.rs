//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::{self, Write};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{LevelFilter, Record};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON lines for structured logging.
///
/// The provided `level` is the baseline. `RUST_LOG` directives are applied on
/// top of it, so a module named there (including `sqlx`, which is otherwise
/// held at warn) gets the level `RUST_LOG` asks for.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Quiet run
/// hn_bootstrap --log-level warn
///
/// # Machine-readable output
/// hn_bootstrap --log-format json
///
/// # Show the statements sqlx executes
/// RUST_LOG=sqlx=debug hn_bootstrap
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let rust_log = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let mut builder = build_logger(level, format, rust_log.as_deref());

    // try_init so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Builder with the CLI baseline first and the `RUST_LOG` directives after it.
fn build_logger(
    level: LevelFilter,
    format: LogFormat,
    rust_log: Option<&str>,
) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(level);
    // sqlx statement logging stays off unless RUST_LOG names sqlx.
    builder.filter_module("sqlx", LevelFilter::Warn);
    builder.filter_module("hn_bootstrap", level);

    if let Some(filters) = rust_log {
        builder.parse_filters(filters);
    }

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| write_json_line(buf, record));
        }
        LogFormat::Plain => {
            builder.format(|buf, record| write_plain_line(buf, record));
        }
    }

    builder
}

/// One JSON object per record: `ts` (epoch millis), `level`, `target`, `msg`.
fn write_json_line<W: Write>(buf: &mut W, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":{},\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        serde_json::to_string(record.target()).unwrap_or_else(|_| "\"\"".into()),
        serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into())
    )
}

fn write_plain_line<W: Write>(buf: &mut W, record: &Record) -> io::Result<()> {
    let level = record.level();
    let colored_level = match level {
        log::Level::Error => level.to_string().red(),
        log::Level::Warn => level.to_string().yellow(),
        log::Level::Info => level.to_string().green(),
        log::Level::Debug => level.to_string().blue(),
        log::Level::Trace => level.to_string().purple(),
    };

    writeln!(
        buf,
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y/%m/%d %H:%M:%S"),
        record.target().cyan(),
        colored_level,
        record.args()
    )
}

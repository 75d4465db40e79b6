//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;

use clap::{Parser, ValueEnum};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use url::Url;

use crate::config::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT, DEFAULT_DB_USER,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// TLS negotiation mode for the database connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SslMode {
    /// Plain TCP only
    Disable,
    /// Try TLS, fall back to plain TCP
    Prefer,
    /// Require TLS without verifying the certificate
    Require,
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        }
    }
}

/// Connection and logging configuration for a bootstrap run.
///
/// Every connection field can be given as a flag or an environment variable.
/// `Config::default()` yields the same values as running the binary with no
/// arguments, so the library can be driven without clap.
///
/// # Examples
///
/// ```bash
/// # Defaults (localhost:54320, postgres/password, hn_db)
/// hn_bootstrap
///
/// # Another host, password from the environment
/// HN_DB_PASSWORD=secret hn_bootstrap --host db.internal --port 5432
///
/// # A full connection URL wins over the discrete fields
/// DATABASE_URL=postgres://app:pw@db/hn hn_bootstrap
/// ```
#[derive(Clone, Parser)]
#[command(
    name = "hn_bootstrap",
    about = "Ensures the posts table exists in the Hacker News database."
)]
pub struct Config {
    /// Database host
    #[arg(long, env = "HN_DB_HOST", default_value = DEFAULT_DB_HOST)]
    pub host: String,

    /// Database port
    #[arg(long, env = "HN_DB_PORT", default_value_t = DEFAULT_DB_PORT)]
    pub port: u16,

    /// Database user
    #[arg(long, env = "HN_DB_USER", default_value = DEFAULT_DB_USER)]
    pub username: String,

    /// Database password
    #[arg(long, env = "HN_DB_PASSWORD", default_value = DEFAULT_DB_PASSWORD, hide_env_values = true)]
    pub password: String,

    /// Database name
    #[arg(long, env = "HN_DB_NAME", default_value = DEFAULT_DB_NAME)]
    pub dbname: String,

    /// TLS mode: disable|prefer|require
    #[arg(long, env = "HN_DB_SSLMODE", value_enum, default_value_t = SslMode::Disable)]
    pub sslmode: SslMode,

    /// Full connection URL; overrides host, port, user, password, and database name
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            username: DEFAULT_DB_USER.to_string(),
            password: DEFAULT_DB_PASSWORD.to_string(),
            dbname: DEFAULT_DB_NAME.to_string(),
            sslmode: SslMode::Disable,
            database_url: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Builds sqlx connect options from this configuration.
    ///
    /// `database_url` takes precedence and carries its own `sslmode`; the
    /// discrete fields are used otherwise.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.database_url {
            Some(url) => url.parse::<PgConnectOptions>(),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.username)
                .password(&self.password)
                .database(&self.dbname)
                .ssl_mode(self.sslmode.into())),
        }
    }

    /// Connection target suitable for logs (no password).
    pub fn redacted_target(&self) -> String {
        match &self.database_url {
            Some(url) => redact_url(url),
            None => format!(
                "{}@{}:{}/{}",
                self.username, self.host, self.port, self.dbname
            ),
        }
    }
}

// Passwords must never reach Debug output either.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("dbname", &self.dbname)
            .field("sslmode", &self.sslmode)
            .field(
                "database_url",
                &self.database_url.as_deref().map(redact_url),
            )
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Masks every password a connection URL can carry: the userinfo password
/// and a `password` query parameter. Unparsable input is not echoed.
fn redact_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return "<unparsable database url>".to_string();
    };

    if url.password().is_some() {
        // Only fails for URLs that cannot carry credentials at all.
        let _ = url.set_password(Some("***"));
    }

    let has_query_password = url
        .query_pairs()
        .any(|(key, _)| key.eq_ignore_ascii_case("password"));
    if has_query_password {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| {
                let value = if key.eq_ignore_ascii_case("password") {
                    "***".to_string()
                } else {
                    value.into_owned()
                };
                (key.into_owned(), value)
            })
            .collect();
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }

    url.to_string()
}

//! Application initialization.
//!
//! Sets up process-wide services before a bootstrap run. Currently that is
//! only the logger; the database connection is opened by the run itself so
//! that its lifetime is scoped to the run.

mod logger;

// Re-export public API
pub use logger::init_logger_with;

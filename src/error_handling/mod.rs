//! Error types for the bootstrap.
//!
//! Every step of a run reports failure through one of these types; the
//! binary treats them all alike (log, print, exit 1), while tests and
//! library callers can match on the step that failed.

mod types;

// Re-export public API
pub use types::{DatabaseError, InitializationError};

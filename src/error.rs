//! Error types for Seedgate
//!
//! Uses `thiserror` for library errors. The binary wraps these in
//! `anyhow` at the top level.

use thiserror::Error;

/// Result type alias for Seedgate operations
pub type SeedgateResult<T> = Result<T, SeedgateError>;

/// Main error type for Seedgate operations
#[derive(Error, Debug)]
pub enum SeedgateError {
    /// A guarded-environment category string did not name one of the
    /// seven known categories. Configuration error; fail fast.
    #[error("invalid guarded environment '{value}' - valid values: *, REVIEW, PRODUCTION, LOCAL, REVIEW+LOCAL, REVIEW+PRODUCTION, PRODUCTION+LOCAL")]
    InvalidGuardedEnvironment { value: String },

    /// A seeder that was permitted to run returned an error
    #[error("seeder '{name}' failed: {message}")]
    SeederFailed { name: String, message: String },
}

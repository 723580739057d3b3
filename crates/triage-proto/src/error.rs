//! Common error types shared across the triage crates.

use thiserror::Error;

/// Errors produced by the shared triage types.
#[derive(Debug, Error)]
pub enum Error {
    /// A category name outside the closed enumeration.
    #[error("unknown category label: {0}")]
    UnknownCategory(String),

    /// A priority name outside the fixed set.
    #[error("unknown priority level: {0}")]
    UnknownPriority(String),
}

/// Convenience alias for results using the shared [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

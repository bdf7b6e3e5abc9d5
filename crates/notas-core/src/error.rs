//! # Error Module
//!
//! Error type for the Notas core.

use thiserror::Error;

/// Errors produced by the core computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input cannot be computed over (e.g. an empty score list).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias for core results.
pub type Result<T> = std::result::Result<T, Error>;

//! Core error type.
//!
//! Higher crates wrap `CoreError` through `#[from]` when a geometry failure
//! can reach their callers; most of them recover locally instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A zero-length vector reached an operation that needs a direction.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}

/// Shorthand result type for `sb-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;

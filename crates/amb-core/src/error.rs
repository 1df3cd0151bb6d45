//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need it.

use thiserror::Error;

use crate::Point;

/// The base error type for `amb-core` and the crates built on it.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    /// A coordinate that cannot be snapped onto the road grid.
    ///
    /// Not produced by `amb_spatial::GridRouter`:
    /// every point has a nearest intersection, so routing always succeeds.
    /// The variant exists so callers that validate input themselves can name
    /// the condition.
    #[error("location {0} is not reachable from the road grid")]
    InvalidLocation(Point),
}

/// Shorthand result type for `amb-core`.
pub type CoreResult<T> = Result<T, CoreError>;

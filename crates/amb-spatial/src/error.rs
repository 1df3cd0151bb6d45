//! Spatial-subsystem error type.

use thiserror::Error;

use amb_core::HouseId;

/// Errors produced by `amb-spatial`.
///
/// Routing itself is infallible; these cover town construction and lookups.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("house {0} not found")]
    HouseNotFound(HouseId),

    #[error("invalid town layout: {0}")]
    Layout(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;

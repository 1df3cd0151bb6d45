//! `amb-spatial`: road grid, routing, and town layout.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`grid`]   | `GridGeometry`, `GridIndex`, nearest-intersection snapping   |
//! | [`router`] | `Router` trait, `GridRouter` (X-then-Y Manhattan routes)     |
//! | [`town`]   | `TownLayout`, `House`, `Rect`, `TownParams`                  |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                           |
//!
//! # Road model
//!
//! Roads run along the lines `x = origin.x + i * cell_size` and
//! `y = origin.y + j * cell_size` for `i in 0..=cells_x`, `j in 0..=cells_y`.
//! Vehicles only ever travel between intersections of those lines, except
//! for the first and last leg of a trip, which connect the requested
//! start/end points to the grid.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod router;
pub mod town;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use grid::{GridGeometry, GridIndex};
pub use router::{GridRouter, Router, grid_route};
pub use town::{House, Rect, TownLayout, TownParams};

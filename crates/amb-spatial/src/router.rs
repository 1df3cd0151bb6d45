//! Routing trait and the default rectilinear grid router.
//!
//! # Pluggability
//!
//! The dispatch center calls routing through the [`Router`] trait, so a
//! different road model (a graph search, a precomputed table) can be dropped
//! in without touching the dispatch or fleet code.  The default
//! [`GridRouter`] produces deterministic Manhattan routes; it does not search
//! for the shortest path.

use amb_core::Point;

use crate::{GridGeometry, GridIndex};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// A route is an ordered list of waypoints to visit.  Implementations must be
/// infallible: every pair of points gets a route, and the last waypoint must
/// be `end` itself.
pub trait Router {
    fn route(&self, start: Point, end: Point) -> Vec<Point>;
}

impl<R: Router + ?Sized> Router for &R {
    fn route(&self, start: Point, end: Point) -> Vec<Point> {
        (**self).route(start, end)
    }
}

// ── GridRouter ────────────────────────────────────────────────────────────────

/// Routes along the road grid, X first, then Y.
///
/// Holds nothing but the geometry, so it is cheap to copy and can be shared
/// freely.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GridRouter {
    pub grid: GridGeometry,
}

impl GridRouter {
    pub fn new(grid: GridGeometry) -> Self {
        Self { grid }
    }
}

impl Router for GridRouter {
    fn route(&self, start: Point, end: Point) -> Vec<Point> {
        grid_route(start, end, &self.grid)
    }
}

/// Build the waypoint list from `start` to `end` on `grid`.
///
/// 1. Snap `start` and `end` independently to their nearest intersections.
/// 2. From the snapped start, step one block along X until the column
///    matches, then one block along Y until the row matches, recording every
///    intersection visited.
/// 3. Append the raw `end`, so the final leg reaches the exact requested
///    point.
///
/// When both points snap to the same intersection the result is
/// `[snapped_start, end]`.
pub fn grid_route(start: Point, end: Point, grid: &GridGeometry) -> Vec<Point> {
    let from = grid.nearest_intersection(start);
    let to = grid.nearest_intersection(end);

    let steps = from.ix.abs_diff(to.ix) + from.iy.abs_diff(to.iy);
    let mut path = Vec::with_capacity(steps as usize + 2);
    path.push(grid.point(from));

    let mut cur: GridIndex = from;
    while cur.ix != to.ix {
        cur.ix = if cur.ix < to.ix { cur.ix + 1 } else { cur.ix - 1 };
        path.push(grid.point(cur));
    }
    while cur.iy != to.iy {
        cur.iy = if cur.iy < to.iy { cur.iy + 1 } else { cur.iy - 1 };
        path.push(grid.point(cur));
    }

    path.push(end);
    path
}

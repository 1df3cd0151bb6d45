//! Grid geometry and intersection snapping.

use amb_core::{CoreError, CoreResult, Point};

/// Integer coordinates of a road intersection: column `ix`, row `iy`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridIndex {
    pub ix: u32,
    pub iy: u32,
}

/// Position and size of the rectilinear road grid.
///
/// There are `cells_x × cells_y` blocks and therefore
/// `(cells_x + 1) × (cells_y + 1)` intersections.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridGeometry {
    /// World position of intersection (0, 0).
    pub origin: Point,
    /// Length of one block edge.
    pub cell_size: f32,
    pub cells_x: u32,
    pub cells_y: u32,
}

impl Default for GridGeometry {
    /// The three-by-three town used by the reference scenario.
    fn default() -> Self {
        Self {
            origin: Point::new(100.0, 100.0),
            cell_size: 200.0,
            cells_x: 3,
            cells_y: 3,
        }
    }
}

impl GridGeometry {
    pub fn new(origin: Point, cell_size: f32, cells_x: u32, cells_y: u32) -> Self {
        Self { origin, cell_size, cells_x, cells_y }
    }

    /// Reject geometries the router cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(CoreError::Config(format!(
                "grid cell size must be positive, got {}",
                self.cell_size
            )));
        }
        if !(self.origin.x.is_finite() && self.origin.y.is_finite()) {
            return Err(CoreError::Config("grid origin must be finite".into()));
        }
        if self.cells_x == 0 || self.cells_y == 0 {
            return Err(CoreError::Config(format!(
                "grid needs at least one block per axis, got {}x{}",
                self.cells_x, self.cells_y
            )));
        }
        Ok(())
    }

    /// World position of the intersection at `idx`.
    #[inline]
    pub fn point(&self, idx: GridIndex) -> Point {
        Point::new(
            self.origin.x + idx.ix as f32 * self.cell_size,
            self.origin.y + idx.iy as f32 * self.cell_size,
        )
    }

    /// Total number of intersections.
    pub fn intersection_count(&self) -> usize {
        (self.cells_x as usize + 1) * (self.cells_y as usize + 1)
    }

    /// World extent of the grid: (top-left, bottom-right) intersections.
    pub fn bounds(&self) -> (Point, Point) {
        let far = self.point(GridIndex { ix: self.cells_x, iy: self.cells_y });
        (self.origin, far)
    }

    /// The intersection nearest to `target` by straight-line distance.
    ///
    /// Exhaustive row-major scan (lowest `iy` first, then lowest `ix`).  Ties
    /// keep the first intersection found, so the result is deterministic even
    /// for points exactly between two roads.
    pub fn nearest_intersection(&self, target: Point) -> GridIndex {
        let mut best = GridIndex { ix: 0, iy: 0 };
        let mut best_dist = f32::INFINITY;
        for iy in 0..=self.cells_y {
            for ix in 0..=self.cells_x {
                let idx = GridIndex { ix, iy };
                let d = target.distance(self.point(idx));
                if d < best_dist {
                    best_dist = d;
                    best = idx;
                }
            }
        }
        best
    }

    /// Convenience: [`nearest_intersection`](Self::nearest_intersection) as a
    /// world point.
    #[inline]
    pub fn snap(&self, target: Point) -> Point {
        self.point(self.nearest_intersection(target))
    }
}

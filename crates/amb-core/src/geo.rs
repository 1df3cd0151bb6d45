//! Planar world coordinates.
//!
//! The town is a flat rectangle measured in abstract distance units (the
//! default map uses 200 units per block), so plain Euclidean geometry is
//! enough; there is no need for geodesic maths.

/// A point in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Move from `self` towards `target` by at most `step` units.
    ///
    /// Never passes `target`: if the remaining distance is shorter than
    /// `step`, the result is `target` itself.
    pub fn step_towards(self, target: Point, step: f32) -> Point {
        let dist = self.distance(target);
        if dist <= step || dist == 0.0 {
            return target;
        }
        let k = step / dist;
        Point {
            x: self.x + (target.x - self.x) * k,
            y: self.y + (target.y - self.y) * k,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

//! A route being followed: waypoints plus the index of the next one.

use amb_core::Point;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    waypoints: Vec<Point>,
    cursor: usize,
}

impl Route {
    pub fn new(waypoints: Vec<Point>) -> Self {
        Self { waypoints, cursor: 0 }
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Index of the next unvisited waypoint.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The waypoint currently being approached.
    #[inline]
    pub fn current_target(&self) -> Option<Point> {
        self.waypoints.get(self.cursor).copied()
    }

    /// The last waypoint, regardless of progress.
    #[inline]
    pub fn destination(&self) -> Option<Point> {
        self.waypoints.last().copied()
    }

    /// `true` once every waypoint has been visited.  An empty route is
    /// exhausted from the start.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.waypoints.len()
    }

    /// Mark the current waypoint as visited.
    #[inline]
    pub fn advance_cursor(&mut self) {
        if !self.is_exhausted() {
            self.cursor += 1;
        }
    }

    /// Skip straight to the end.
    pub fn finish(&mut self) {
        self.cursor = self.waypoints.len();
    }

    /// Waypoints not yet visited.
    pub fn remaining(&self) -> &[Point] {
        &self.waypoints[self.cursor.min(self.waypoints.len())..]
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

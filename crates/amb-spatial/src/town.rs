//! Town layout: houses placed in lots inside each grid block.
//!
//! Every block is split into `lots_x × lots_y` lots after subtracting the
//! road width.  Each lot holds one house whose footprint is jittered by the
//! scenario RNG, so two towns built from the same seed are identical.
//!
//! A house's *address point* is the middle of its lower edge (the front
//! door, facing the road below).  Emergencies reported from a house are
//! located there.

use amb_core::{HouseId, Point, SimRng};

use crate::{GridGeometry, SpatialError, SpatialResult};

/// Axis-aligned rectangle, `(x, y)` at the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Middle of the bottom edge.
    pub fn bottom_center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct House {
    pub id: HouseId,
    pub body: Rect,
}

impl House {
    #[inline]
    pub fn address(&self) -> Point {
        self.body.bottom_center()
    }
}

/// Lot subdivision parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TownParams {
    pub lots_x: u32,
    pub lots_y: u32,
    pub road_width: f32,
    /// Gap kept free on each side of a house inside its lot.
    pub padding: f32,
}

impl Default for TownParams {
    fn default() -> Self {
        Self { lots_x: 3, lots_y: 2, road_width: 44.0, padding: 8.0 }
    }
}

/// All houses in the town, numbered from 1 in row-major lot order.
#[derive(Clone, Debug, Default)]
pub struct TownLayout {
    houses: Vec<House>,
}

impl TownLayout {
    /// Lay out one house per lot over every block of `grid`.
    pub fn generate(grid: &GridGeometry, params: TownParams, rng: &mut SimRng) -> SpatialResult<Self> {
        grid.validate().map_err(|e| SpatialError::Layout(e.to_string()))?;
        if !(params.road_width.is_finite() && params.padding.is_finite()) {
            return Err(SpatialError::Layout("road width and padding must be finite".into()));
        }
        if params.lots_x == 0 || params.lots_y == 0 {
            return Err(SpatialError::Layout("lot counts must be non-zero".into()));
        }
        let usable = grid.cell_size - params.road_width;
        let lot_w = usable / params.lots_x as f32;
        let lot_h = usable / params.lots_y as f32;
        let w = lot_w - params.padding;
        let h = lot_h - params.padding;
        if w <= 0.0 || h <= 0.0 {
            return Err(SpatialError::Layout(format!(
                "lots of {lot_w:.1}x{lot_h:.1} leave no room for a house"
            )));
        }

        let rows = grid.cells_y * params.lots_y;
        let cols = grid.cells_x * params.lots_x;
        let mut houses = Vec::with_capacity((rows * cols) as usize);
        let mut next_id = HouseId(1);

        for py in 0..rows {
            for px in 0..cols {
                let (by, ly) = (py / params.lots_y, py % params.lots_y);
                let (bx, lx) = (px / params.lots_x, px % params.lots_x);

                let block_x = grid.origin.x + bx as f32 * grid.cell_size + params.road_width / 2.0;
                let block_y = grid.origin.y + by as f32 * grid.cell_size + params.road_width / 2.0;
                let x = block_x + lx as f32 * lot_w + params.padding / 2.0;
                let y = block_y + ly as f32 * lot_h + params.padding / 2.0;

                let vw = w * rng.gen_range(0.75f32..0.95);
                let vh = h * rng.gen_range(0.55f32..0.85);
                let body = Rect {
                    x: x + (w - vw) / 2.0,
                    y: y + (h - vh) / 2.0 + vh * 0.08,
                    width: vw,
                    height: vh,
                };

                houses.push(House { id: next_id, body });
                next_id = next_id.next();
            }
        }

        Ok(Self { houses })
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn len(&self) -> usize {
        self.houses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.houses.is_empty()
    }

    pub fn house(&self, id: HouseId) -> SpatialResult<&House> {
        self.houses
            .iter()
            .find(|h| h.id == id)
            .ok_or(SpatialError::HouseNotFound(id))
    }

    /// Address point of house `id`.
    pub fn address(&self, id: HouseId) -> SpatialResult<Point> {
        self.house(id).map(House::address)
    }

    /// The house whose address lies within `tolerance` of `p` on both axes.
    pub fn house_at_address(&self, p: Point, tolerance: f32) -> Option<&House> {
        self.houses.iter().find(|h| {
            let a = h.address();
            (a.x - p.x).abs() < tolerance && (a.y - p.y).abs() < tolerance
        })
    }
}

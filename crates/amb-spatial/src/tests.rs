//! Unit tests for amb-spatial.

#[cfg(test)]
mod helpers {
    use amb_core::Point;

    use crate::GridGeometry;

    /// 3×3 blocks of 200 units starting at (100, 100): intersections at
    /// 100, 300, 500, 700 on both axes.
    pub fn town_grid() -> GridGeometry {
        GridGeometry::new(Point::new(100.0, 100.0), 200.0, 3, 3)
    }
}

// ── GridGeometry ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use amb_core::{CoreError, Point};

    use super::helpers::town_grid;
    use crate::{GridGeometry, GridIndex};

    #[test]
    fn intersection_count_includes_both_edges() {
        assert_eq!(town_grid().intersection_count(), 16);
    }

    #[test]
    fn bounds() {
        let (lo, hi) = town_grid().bounds();
        assert_eq!(lo, Point::new(100.0, 100.0));
        assert_eq!(hi, Point::new(700.0, 700.0));
    }

    #[test]
    fn snaps_to_nearest() {
        let g = town_grid();
        assert_eq!(g.nearest_intersection(Point::new(290.0, 120.0)), GridIndex { ix: 1, iy: 0 });
        assert_eq!(g.snap(Point::new(640.0, 690.0)), Point::new(700.0, 700.0));
    }

    #[test]
    fn snaps_points_outside_the_grid() {
        let g = town_grid();
        assert_eq!(g.snap(Point::new(-500.0, -500.0)), Point::new(100.0, 100.0));
        assert_eq!(g.snap(Point::new(5000.0, 180.0)), Point::new(700.0, 100.0));
    }

    #[test]
    fn tie_goes_to_first_in_row_major_order() {
        let g = town_grid();
        // Exactly between (100,100), (300,100), (100,300) and (300,300).
        assert_eq!(g.nearest_intersection(Point::new(200.0, 200.0)), GridIndex { ix: 0, iy: 0 });
        // Between (300,100) and (300,300): the lower row wins.
        assert_eq!(g.nearest_intersection(Point::new(300.0, 200.0)), GridIndex { ix: 1, iy: 0 });
    }

    #[test]
    fn validate_rejects_bad_cell_size() {
        let g = GridGeometry::new(Point::ORIGIN, 0.0, 2, 2);
        assert!(matches!(g.validate(), Err(CoreError::Config(_))));
        let g = GridGeometry::new(Point::ORIGIN, f32::NAN, 2, 2);
        assert!(g.validate().is_err());
        assert!(town_grid().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_cells() {
        for (cx, cy) in [(0, 0), (0, 3), (3, 0)] {
            let g = GridGeometry::new(Point::new(100.0, 100.0), 200.0, cx, cy);
            assert!(matches!(g.validate(), Err(CoreError::Config(_))), "accepted {cx}x{cy}");
        }
        assert!(GridGeometry::new(Point::ORIGIN, 200.0, 1, 1).validate().is_ok());
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use amb_core::Point;

    use super::helpers::town_grid;
    use crate::{GridRouter, Router, grid_route};

    #[test]
    fn x_then_y() {
        let g = town_grid();
        let end = Point::new(505.0, 310.0);
        let path = grid_route(Point::new(102.0, 98.0), end, &g);
        assert_eq!(
            path,
            vec![
                Point::new(100.0, 100.0),
                Point::new(300.0, 100.0),
                Point::new(500.0, 100.0),
                Point::new(500.0, 300.0),
                end,
            ]
        );
    }

    #[test]
    fn walks_backwards_too() {
        let g = town_grid();
        let end = Point::new(100.0, 100.0);
        let path = grid_route(Point::new(700.0, 500.0), end, &g);
        assert_eq!(
            path,
            vec![
                Point::new(700.0, 500.0),
                Point::new(500.0, 500.0),
                Point::new(300.0, 500.0),
                Point::new(100.0, 500.0),
                Point::new(100.0, 300.0),
                Point::new(100.0, 100.0),
                end,
            ]
        );
    }

    #[test]
    fn consecutive_grid_waypoints_are_one_block_apart() {
        let g = town_grid();
        let path = grid_route(Point::new(130.0, 650.0), Point::new(690.0, 90.0), &g);
        let grid_part = &path[..path.len() - 1];
        for pair in grid_part.windows(2) {
            let d = pair[0].distance(pair[1]);
            assert!((d - 200.0).abs() < 1e-3, "step of {d}");
            assert!(pair[0].x == pair[1].x || pair[0].y == pair[1].y);
        }
    }

    #[test]
    fn final_waypoint_is_raw_end() {
        let g = town_grid();
        let end = Point::new(333.3, 444.4);
        let path = grid_route(Point::new(10.0, 10.0), end, &g);
        assert_eq!(*path.last().unwrap(), end);
    }

    #[test]
    fn degenerate_route_has_two_points() {
        let g = town_grid();
        let start = Point::new(305.0, 295.0);
        let end = Point::new(298.0, 310.0);
        let path = grid_route(start, end, &g);
        assert_eq!(path, vec![Point::new(300.0, 300.0), end]);
    }

    #[test]
    fn deterministic() {
        let router = GridRouter::new(town_grid());
        let a = router.route(Point::new(120.0, 400.0), Point::new(610.0, 190.0));
        let b = router.route(Point::new(120.0, 400.0), Point::new(610.0, 190.0));
        assert_eq!(a, b);
    }

    #[test]
    fn router_by_reference() {
        let router = GridRouter::new(town_grid());
        let by_ref: &dyn Router = &router;
        assert_eq!(
            by_ref.route(Point::new(100.0, 100.0), Point::new(300.0, 100.0)),
            router.route(Point::new(100.0, 100.0), Point::new(300.0, 100.0)),
        );
    }
}

// ── Town layout ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod town {
    use amb_core::{HouseId, Point, SimRng};

    use super::helpers::town_grid;
    use crate::{GridGeometry, SpatialError, TownLayout, TownParams};

    fn town(seed: u64) -> TownLayout {
        TownLayout::generate(&town_grid(), TownParams::default(), &mut SimRng::new(seed)).unwrap()
    }

    #[test]
    fn one_house_per_lot() {
        // 3×3 blocks × (3×2) lots.
        let t = town(1);
        assert_eq!(t.len(), 54);
        assert_eq!(t.houses()[0].id, HouseId(1));
        assert_eq!(t.houses()[53].id, HouseId(54));
    }

    #[test]
    fn houses_stay_inside_their_block() {
        let g = town_grid();
        for house in town(3).houses() {
            let a = house.address();
            let (lo, hi) = g.bounds();
            assert!(a.x > lo.x && a.x < hi.x);
            assert!(a.y > lo.y && a.y < hi.y);
            assert!(house.body.width > 0.0 && house.body.height > 0.0);
        }
    }

    #[test]
    fn same_seed_same_town() {
        let a = town(9);
        let b = town(9);
        assert_eq!(a.houses(), b.houses());
    }

    #[test]
    fn lookup_by_id_and_address() {
        let t = town(5);
        let addr = t.address(HouseId(10)).unwrap();
        assert_eq!(t.house_at_address(addr, 5.0).map(|h| h.id), Some(HouseId(10)));
        assert!(matches!(t.address(HouseId(999)), Err(SpatialError::HouseNotFound(HouseId(999)))));
    }

    #[test]
    fn rejects_unusable_grid() {
        let bad = [
            GridGeometry::new(Point::new(100.0, 100.0), f32::NAN, 3, 3),
            GridGeometry::new(Point::new(100.0, 100.0), 200.0, 0, 3),
            GridGeometry::new(Point::new(f32::INFINITY, 100.0), 200.0, 3, 3),
        ];
        for grid in bad {
            let result = TownLayout::generate(&grid, TownParams::default(), &mut SimRng::new(0));
            assert!(matches!(result, Err(SpatialError::Layout(_))), "accepted {grid:?}");
        }
        let params = TownParams { road_width: f32::NAN, ..TownParams::default() };
        let result = TownLayout::generate(&town_grid(), params, &mut SimRng::new(0));
        assert!(matches!(result, Err(SpatialError::Layout(_))));
    }

    #[test]
    fn rejects_lots_without_room() {
        let params = TownParams { lots_x: 100, ..TownParams::default() };
        let err = TownLayout::generate(&town_grid(), params, &mut SimRng::new(0));
        assert!(matches!(err, Err(SpatialError::Layout(_))));
    }
}

//! Fluent builder for constructing a [`DispatchCenter`].

use amb_core::{EmergencyId, Point, SimClock};
use amb_fleet::Fleet;
use amb_queue::EmergencyQueue;
use amb_spatial::{GridRouter, Router};

use crate::{DispatchCenter, DispatchConfig, DispatchError, DispatchResult};

/// Fluent builder for [`DispatchCenter`].
///
/// # Required inputs
///
/// - the center's `location`
/// - at least one home base (one vehicle is created per home base)
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.config(c)`      | `DispatchConfig::default()`      |
///
/// `build()` routes on `config.grid` with a [`GridRouter`];
/// `build_with_router(r)` plugs in any other [`Router`].
///
/// # Example
///
/// ```rust,ignore
/// let center = DispatchCenterBuilder::new(hospital)
///     .home_bases(parking_spots)
///     .config(DispatchConfig::default().with_scene_duration(6.0))
///     .build()?;
/// ```
pub struct DispatchCenterBuilder {
    location: Point,
    home_bases: Vec<Point>,
    config: DispatchConfig,
}

impl DispatchCenterBuilder {
    pub fn new(location: Point) -> Self {
        Self {
            location,
            home_bases: Vec::new(),
            config: DispatchConfig::default(),
        }
    }

    /// Parking spots, one per vehicle, in roster order.
    pub fn home_bases(mut self, home_bases: Vec<Point>) -> Self {
        self.home_bases = home_bases;
        self
    }

    /// Add a single parking spot at the end of the roster.
    pub fn home_base(mut self, home_base: Point) -> Self {
        self.home_bases.push(home_base);
        self
    }

    pub fn config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate inputs and return a center routing on `config.grid`.
    pub fn build(self) -> DispatchResult<DispatchCenter<GridRouter>> {
        let router = GridRouter::new(self.config.grid);
        self.build_with_router(router)
    }

    /// Validate inputs and return a center using `router`.
    pub fn build_with_router<R: Router>(self, router: R) -> DispatchResult<DispatchCenter<R>> {
        self.config.validate()?;
        if self.home_bases.is_empty() {
            return Err(DispatchError::Config("a dispatch center needs at least one vehicle".into()));
        }
        if !(self.location.x.is_finite() && self.location.y.is_finite()) {
            return Err(DispatchError::Config(format!("center location {} is not finite", self.location)));
        }
        if let Some(bad) = self.home_bases.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(DispatchError::Config(format!("home base {bad} is not finite")));
        }

        let fleet = Fleet::from_home_bases(self.config.first_vehicle_id, &self.home_bases)
            .map_err(|e| DispatchError::Config(e.to_string()))?;
        let queue = match self.config.queue_capacity {
            Some(capacity) => EmergencyQueue::with_capacity_limit(capacity),
            None => EmergencyQueue::new(),
        };

        log::debug!(
            "dispatch center at {} built with {} vehicles",
            self.location,
            fleet.len()
        );

        Ok(DispatchCenter {
            config: self.config,
            location: self.location,
            router,
            fleet,
            queue,
            clock: SimClock::new(),
            next_emergency_id: EmergencyId(1),
            handled: 0,
            received: 0,
            rejected: 0,
        })
    }
}

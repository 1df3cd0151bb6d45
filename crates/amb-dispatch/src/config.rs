//! Dispatch center configuration.

use amb_core::{CoreError, CoreResult, VehicleId};
use amb_fleet::MotionParams;
use amb_spatial::GridGeometry;

/// Everything a dispatch center needs besides its location and parking
/// spots.  All plain values; the defaults reproduce the reference town.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Road grid used for routing.
    pub grid: GridGeometry,

    /// Speeds, thresholds and scene duration shared by the fleet.
    pub motion: MotionParams,

    /// Maximum backlog size.  `None` means unbounded.
    pub queue_capacity: Option<usize>,

    /// Id of the first vehicle; the rest follow consecutively.
    pub first_vehicle_id: VehicleId,

    /// Call `on_snapshot` every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            grid: GridGeometry::default(),
            motion: MotionParams::default(),
            queue_capacity: None,
            first_vehicle_id: VehicleId(1),
            snapshot_interval_ticks: 1,
        }
    }
}

impl DispatchConfig {
    pub fn with_scene_duration(mut self, secs: f32) -> Self {
        self.motion.scene_duration_secs = secs;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.motion.speed = speed;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    pub fn with_grid(mut self, grid: GridGeometry) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_first_vehicle_id(mut self, id: VehicleId) -> Self {
        self.first_vehicle_id = id;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> CoreResult<()> {
        self.grid.validate()?;

        let m = &self.motion;
        positive("vehicle speed", m.speed)?;
        positive("waypoint snap threshold", m.waypoint_snap)?;
        positive("arrival threshold", m.arrival_threshold)?;
        non_negative("return speed factor", m.return_speed_factor)?;
        non_negative("idle drift factor", m.idle_drift_factor)?;
        non_negative("idle settle threshold", m.idle_settle_threshold)?;
        non_negative("scene duration", m.scene_duration_secs)?;

        if self.queue_capacity == Some(0) {
            return Err(CoreError::Config("queue capacity must be at least 1".into()));
        }
        Ok(())
    }
}

fn positive(what: &str, v: f32) -> CoreResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{what} must be positive, got {v}")))
    }
}

fn non_negative(what: &str, v: f32) -> CoreResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{what} must not be negative, got {v}")))
    }
}

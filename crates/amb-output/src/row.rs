//! Plain data row types written by output backends.

use amb_core::{SimTime, Tick};
use amb_dispatch::TickSummary;
use amb_fleet::VehicleSnapshot;

/// One vehicle at one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshotRow {
    pub tick:         u64,
    pub vehicle_id:   u32,
    pub status:       &'static str,
    pub x:            f32,
    pub y:            f32,
    /// Emergency being served; `None` when idle or returning.
    pub emergency_id: Option<u64>,
    /// Remaining seconds on scene; `None` unless on scene.
    pub scene_timer:  Option<f32>,
    pub handled:      u64,
}

impl VehicleSnapshotRow {
    pub fn from_snapshot(tick: Tick, v: &VehicleSnapshot) -> Self {
        Self {
            tick:         tick.0,
            vehicle_id:   v.id.0,
            status:       v.status.label(),
            x:            v.position.x,
            y:            v.position.y,
            emergency_id: v.assignment.as_ref().map(|a| a.emergency.0),
            scene_timer:  v.scene_timer,
            handled:      v.handled,
        }
    }
}

/// Summary statistics for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    pub time_secs:        f64,
    pub assigned:         u32,
    pub arrived_on_scene: u32,
    pub completed:        u32,
    pub returned:         u32,
    pub pending:          u32,
    pub idle_vehicles:    u32,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        let SimTime(time_secs) = s.time;
        Self {
            tick:             s.tick.0,
            time_secs,
            assigned:         s.assigned,
            arrived_on_scene: s.arrived_on_scene,
            completed:        s.completed,
            returned:         s.returned,
            pending:          s.pending,
            idle_vehicles:    s.idle_vehicles,
        }
    }
}
